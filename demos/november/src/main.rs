//! november — plan a November 2025 road trip across 25 US cities.
//!
//! Usage: `november [START_CITY] [SEED]`
//!
//! Part 1 builds a BFS-tree route and a DFS route from `START_CITY`
//! (default Denver) and finds the lowest-risk start date for each.  Part 2
//! samples 10–20 cities with a seeded RNG (default seed 42), runs every
//! graph algorithm from the first sampled city, and plans a trip through
//! the sample in BFS-tree order.  Daily and per-leg ledgers are written to
//! `output/november/`.
//!
//! Set `RUST_LOG=debug` to see shortest-path fallbacks and rejected start
//! dates.

mod data;

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use rt_core::{BASE_MPG, CityId, CityTable, DateWindow, MAX_HOURS_PER_DAY, MAX_SPEED_MPH, NaiveDate};
use rt_data::{LedgerCsvWriter, load_cities_reader, load_graph_reader, load_weather_reader};
use rt_graph::{Graph, tree_preorder};
use rt_planner::{PlannerError, TripPlanner};

use data::{CITIES_CSV, EDGES_CSV, WEATHER_CSV};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_START: &str = "Denver";
const DEFAULT_SEED:  u64  = 42;
const OUTPUT_DIR:    &str = "output/november";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let start_name = args.next().unwrap_or_else(|| DEFAULT_START.to_owned());
    let seed = match args.next() {
        Some(s) => s.parse::<u64>().with_context(|| format!("invalid seed {s:?}"))?,
        None => DEFAULT_SEED,
    };

    println!("=== november — roadtrip planner ===");
    println!("Start city: {start_name}  |  Seed: {seed}");
    println!();

    // 1. Load the embedded tables.
    let cities = load_cities_reader(Cursor::new(CITIES_CSV))?;
    let graph = load_graph_reader(Cursor::new(EDGES_CSV), &cities)?;
    let weather = load_weather_reader(Cursor::new(WEATHER_CSV))?;
    println!(
        "Loaded {} cities, {} directed edges, {} weather entries",
        cities.len(),
        graph.edge_count(),
        weather.len(),
    );
    print_cities(&cities);

    // 2. Planner and output directory.
    let window = DateWindow::new(date(2025, 11, 1)?, date(2025, 11, 30)?);
    let planner = TripPlanner::new(&cities, &graph, &weather);
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let out = Path::new(OUTPUT_DIR);

    // 3. Part 1: BFS and DFS routes from the named city.
    let start = cities.id_by_name(&start_name)?;
    println!();
    println!("── Part 1: routes from {} ──", cities.name_of(start)?);

    let t = Instant::now();
    let bfs = graph.bfs(start)?;
    println!("BFS finished in {:.1} µs", t.elapsed().as_secs_f64() * 1e6);
    let bfs_route = tree_preorder(&bfs.parents, start);

    let t = Instant::now();
    let dfs_route = graph.dfs_recursive(start)?;
    println!("DFS finished in {:.1} µs", t.elapsed().as_secs_f64() * 1e6);

    print_route("BFS", &bfs_route, &cities)?;
    print_route("DFS", &dfs_route, &cities)?;

    plan("BFS", &planner, &bfs_route, window, out)?;
    plan("DFS", &planner, &dfs_route, window, out)?;

    // 4. Part 2: random sample.
    println!();
    println!("── Part 2: random sample ──");
    let mut rng = SmallRng::seed_from_u64(seed);
    let ids: Vec<CityId> = cities.ids().collect();
    let k = rng.gen_range(10..=20).min(ids.len());
    let sampled: Vec<CityId> = ids.choose_multiple(&mut rng, k).copied().collect();
    println!("Sampled {k} cities: {}", names(&sampled, &cities)?.join(", "));

    let origin = sampled[0];
    run_algorithms(&graph, origin, &sampled, &cities)?;

    let tree = graph.bfs(origin)?;
    let travel_route: Vec<CityId> = tree_preorder(&tree.parents, origin)
        .into_iter()
        .filter(|c| sampled.contains(c))
        .collect();
    print_route("Sampled BFS", &travel_route, &cities)?;
    plan("Sampled BFS", &planner, &travel_route, window, out)?;

    println!();
    println!("Ledgers written to {OUTPUT_DIR}/");
    Ok(())
}

// ── Steps ─────────────────────────────────────────────────────────────────────

fn run_algorithms(graph: &Graph, origin: CityId, sampled: &[CityId], cities: &CityTable) -> Result<()> {
    let t = Instant::now();
    let bfs = graph.bfs(origin)?;
    let dfs = graph.dfs_iterative(origin)?;
    let prim = graph.prim_mst(origin)?;
    let kruskal = graph.kruskal_mst();
    let bellman = graph.bellman_ford(origin)?;
    let dijkstra = graph.dijkstra_all(origin)?;
    println!("All algorithms finished in {:.1} µs", t.elapsed().as_secs_f64() * 1e6);

    println!();
    println!("From {}:", cities.name_of(origin)?);
    println!("{:<20} {:>5} {:>14} {:>14}", "City", "Hops", "Bellman-Ford", "Dijkstra");
    println!("{}", "-".repeat(56));
    for &c in sampled {
        let hops = bfs.hops[c.index()].map_or_else(|| "-".to_owned(), |h| h.to_string());
        println!(
            "{:<20} {:>5} {:>14.1} {:>14.1}",
            cities.name_of(c)?,
            hops,
            bellman.distance(c),
            dijkstra[c.index()],
        );
    }

    println!();
    println!("DFS (iterative) order: {}", names(&dfs, cities)?.join(" → "));
    println!(
        "Prim MST:    {} edges, {:.1} mi",
        prim.edges.len(),
        prim.total_weight,
    );
    println!(
        "Kruskal MST: {} edges, {:.1} mi",
        kruskal.edges.len(),
        kruskal.total_weight,
    );
    Ok(())
}

/// Search the window for `route`, print the summary, and export ledgers.
fn plan(
    label:   &str,
    planner: &TripPlanner<'_>,
    route:   &[CityId],
    window:  DateWindow,
    out:     &Path,
) -> Result<()> {
    println!();
    println!("{label} travel info");

    let (best, trip) = match planner.best_travel_date(route, window) {
        Ok(found) => found,
        Err(PlannerError::NoFeasibleWindow { window }) => {
            println!("  No start date in {window} finishes inside the window.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("  Max speed {MAX_SPEED_MPH} mph, {MAX_HOURS_PER_DAY} h/day, base {BASE_MPG} mpg");
    println!("  Best start date:   {best}");
    println!("  Trip end date:     {}", trip.end_date);
    println!("  Total distance:    {:.2} mi", trip.total_distance_miles);
    println!("  Total fuel:        {:.2} gal", trip.total_fuel_gallons);
    println!("  Total hours:       {:.2}", trip.total_hours);
    match trip.overall_mpg {
        Some(mpg) => println!("  Overall MPG:       {mpg:.2}"),
        None => println!("  Overall MPG:       N/A"),
    }
    println!("  Total risk:        {:.2}", trip.total_risk);
    let fallbacks = trip.legs.iter().filter(|l| l.via_fallback).count();
    println!("  Legs:              {} ({fallbacks} via shortest path)", trip.legs.len());

    println!();
    println!("  {:<12} {:>6} {:>9} {:>8} {:>7} {:>6}", "Date", "Hours", "Miles", "Gallons", "MPG", "Risk");
    for day in &trip.days {
        let mpg = day.mpg.map_or_else(|| "N/A".to_owned(), |m| format!("{m:.2}"));
        println!(
            "  {:<12} {:>6.2} {:>9.2} {:>8.2} {:>7} {:>6.2}",
            day.date.to_string(),
            day.hours,
            day.distance_miles,
            day.fuel_gallons,
            mpg,
            day.risk,
        );
    }

    let stem = label.to_lowercase().replace(' ', "_");
    let mut writer = LedgerCsvWriter::new(out, &stem)?;
    writer.write_trip(&trip)?;
    writer.finish()?;
    tracing::info!(route = label, %stem, "ledger exported");
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).with_context(|| format!("invalid date {y}-{m}-{d}"))
}

fn names(route: &[CityId], cities: &CityTable) -> Result<Vec<String>> {
    route
        .iter()
        .map(|&c| Ok(cities.name_of(c)?.to_owned()))
        .collect()
}

fn print_cities(cities: &CityTable) {
    println!();
    println!("Available cities:");
    for city in cities.iter() {
        println!("  {:>2} → {}, {} ({} ft)", city.id.0, city.name, city.state, city.elevation_ft);
    }
}

fn print_route(label: &str, route: &[CityId], cities: &CityTable) -> Result<()> {
    println!();
    println!("{label} visit order ({} cities):", route.len());
    println!("  {}", names(route, cities)?.join(" → "));
    Ok(())
}

//! Unit tests for rt-data.

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use rt_core::{CityId, CityRef, CoreError, DEFAULT_RISK, NaiveDate};
    use rt_graph::GraphError;

    use crate::{DataError, load_cities_reader, load_graph_reader, load_weather_reader};

    const CITIES: &str = "\
city_id,city_name,state,sea_level_ft
0,Denver,CO,5280
1,Kansas City,MO,910
2,  Omaha ,NE,1090
";

    const EDGES: &str = "\
from_id,to_id,map_distance_miles
0,1,605.2
1,2,186.0
";

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, day).unwrap()
    }

    #[test]
    fn cities_load() {
        let cities = load_cities_reader(Cursor::new(CITIES)).unwrap();
        assert_eq!(cities.len(), 3);
        assert_eq!(cities.elevation_ft(CityId(0)).unwrap(), 5280.0);
        assert_eq!(cities.name_of(CityId(1)).unwrap(), "Kansas City");
        // Names are trimmed on load.
        assert_eq!(cities.id_by_name("omaha").unwrap(), CityId(2));
    }

    #[test]
    fn cities_bad_number_is_parse_error() {
        let src = "city_id,city_name,state,sea_level_ft\n0,Denver,CO,high\n";
        let err = load_cities_reader(Cursor::new(src)).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn cities_missing_column_is_parse_error() {
        let src = "city_id,city_name,sea_level_ft\n0,Denver,5280\n";
        assert!(matches!(load_cities_reader(Cursor::new(src)), Err(DataError::Parse(_))));
    }

    #[test]
    fn edges_are_undirected() {
        let cities = load_cities_reader(Cursor::new(CITIES)).unwrap();
        let graph = load_graph_reader(Cursor::new(EDGES), &cities).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.direct_weight(CityId(0), CityId(1)), Some(605.2));
        assert_eq!(graph.direct_weight(CityId(1), CityId(0)), Some(605.2));
        assert_eq!(graph.direct_weight(CityId(2), CityId(1)), Some(186.0));
        assert_eq!(graph.direct_weight(CityId(0), CityId(2)), None);
    }

    #[test]
    fn edge_to_unknown_city_fails() {
        let cities = load_cities_reader(Cursor::new(CITIES)).unwrap();
        let src = "from_id,to_id,map_distance_miles\n0,7,10\n";
        let err = load_graph_reader(Cursor::new(src), &cities).unwrap_err();
        assert!(matches!(
            err,
            DataError::Core(CoreError::UnknownCity(CityRef::Id(CityId(7))))
        ));
    }

    #[test]
    fn sparse_city_ids_overflow_graph() {
        let src = "city_id,city_name,state,sea_level_ft\n0,A,XX,0\n5,B,XX,0\n";
        let cities = load_cities_reader(Cursor::new(src)).unwrap();
        let edges = "from_id,to_id,map_distance_miles\n0,5,10\n";
        let err = load_graph_reader(Cursor::new(edges), &cities).unwrap_err();
        assert!(matches!(err, DataError::Graph(GraphError::VertexOutOfRange { .. })));
    }

    #[test]
    fn weather_with_condition_column() {
        let src = "\
city_id,date,condition,risk
0,2025-11-01,Sunny,1
0,2025-11-02,Snow,4.5
1,2025-11-02,Rain,2
";
        let weather = load_weather_reader(Cursor::new(src)).unwrap();
        assert_eq!(weather.len(), 3);
        assert_eq!(weather.risk(CityId(0), d(2)), 4.5);
        assert_eq!(weather.average(CityId(0), CityId(1), d(2)), 3.25);
        assert_eq!(weather.risk(CityId(1), d(1)), DEFAULT_RISK);
    }

    #[test]
    fn weather_without_condition_column() {
        let src = "city_id,date,risk\n2,2025-11-30,0.5\n";
        let weather = load_weather_reader(Cursor::new(src)).unwrap();
        assert_eq!(weather.risk(CityId(2), d(30)), 0.5);
    }

    #[test]
    fn weather_bad_date_is_parse_error() {
        let src = "city_id,date,risk\n0,11/01/2025,1\n";
        let err = load_weather_reader(Cursor::new(src)).unwrap_err();
        assert!(matches!(err, DataError::Parse(msg) if msg.contains("11/01/2025")));
    }
}

#[cfg(test)]
mod file_tests {
    use std::fs;

    use rt_core::CityId;

    use crate::{DataError, load_cities_csv, load_graph_csv, load_weather_csv};

    #[test]
    fn csv_wrappers_read_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cities_path = dir.path().join("cities.csv");
        let edges_path = dir.path().join("edges.csv");
        let weather_path = dir.path().join("weather.csv");
        fs::write(&cities_path, "city_id,city_name,state,sea_level_ft\n0,A,XX,0\n1,B,XX,100\n").unwrap();
        fs::write(&edges_path, "from_id,to_id,map_distance_miles\n0,1,50\n").unwrap();
        fs::write(&weather_path, "city_id,date,risk\n1,2025-11-03,2\n").unwrap();

        let cities = load_cities_csv(&cities_path).unwrap();
        let graph = load_graph_csv(&edges_path, &cities).unwrap();
        let weather = load_weather_csv(&weather_path).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(graph.direct_weight(CityId(1), CityId(0)), Some(50.0));
        assert_eq!(weather.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_cities_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }
}

#[cfg(test)]
mod writer_tests {
    use rt_core::{City, CityId, CityTable, NaiveDate, WeatherRisk};
    use rt_graph::Graph;
    use rt_planner::simulate_trip;

    use crate::LedgerCsvWriter;
    use crate::writer::{DAY_HEADERS, LEG_HEADERS};

    fn read_rows(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        (headers, rows)
    }

    /// A→B 700 mi (two days) then B→C 0 mi.
    fn trip() -> rt_planner::TripResult {
        let cities: CityTable = [
            City::new(CityId(0), "A", "XX", 0.0),
            City::new(CityId(1), "B", "XX", 0.0),
            City::new(CityId(2), "C", "XX", 0.0),
        ]
        .into_iter()
        .collect();
        let mut graph = Graph::new(3);
        graph.add_road(CityId(0), CityId(1), 700.0).unwrap();
        graph.add_road(CityId(1), CityId(2), 0.0).unwrap();
        let start = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        simulate_trip(&cities, &graph, &WeatherRisk::new(), &[CityId(0), CityId(1), CityId(2)], start)
            .unwrap()
    }

    #[test]
    fn files_created_with_headers() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut w = LedgerCsvWriter::new(dir.path(), "bfs").unwrap();
        w.finish().unwrap();

        let (days, _) = read_rows(&dir.path().join("bfs_days.csv"));
        assert_eq!(days, DAY_HEADERS);
        let (legs, _) = read_rows(&dir.path().join("bfs_legs.csv"));
        assert_eq!(legs, LEG_HEADERS);
    }

    #[test]
    fn trip_rows_written() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let trip = trip();
        let mut w = LedgerCsvWriter::new(dir.path(), "route").unwrap();
        w.write_trip(&trip).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let (_, days) = read_rows(&dir.path().join("route_days.csv"));
        assert_eq!(days.len(), 2);
        assert_eq!(days[0][0], "2025-11-01");
        assert_eq!(days[0][1], "8");
        assert_eq!(days[1][0], "2025-11-02");
        assert!(!days[1][4].is_empty());

        let (_, legs) = read_rows(&dir.path().join("route_legs.csv"));
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0][..4], ["0", "1", "700", "0"]);
        assert_eq!(legs[1][..2], ["1", "2"]);
    }

    #[test]
    fn undefined_mpg_is_empty_cell() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut trip = trip();
        trip.days[1].mpg = None;
        let mut w = LedgerCsvWriter::new(dir.path(), "t").unwrap();
        w.write_days(&trip.days).unwrap();
        w.finish().unwrap();

        let (_, days) = read_rows(&dir.path().join("t_days.csv"));
        assert_eq!(days[1][4], "");
    }
}

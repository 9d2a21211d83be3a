//! Embedded sample tables: 25 cities of the western and central US, their
//! connecting highways, and November 2025 weather risk.
//!
//! Risk scale: 1 = clear, 5 = blizzard.  Dates with no row score the
//! default risk.

pub const CITIES_CSV: &str = "\
city_id,city_name,state,sea_level_ft
0,Denver,CO,5280
1,Colorado Springs,CO,6035
2,Cheyenne,WY,6062
3,Salt Lake City,UT,4226
4,Albuquerque,NM,5312
5,Santa Fe,NM,7199
6,Kansas City,MO,910
7,Omaha,NE,1090
8,Wichita,KS,1299
9,Oklahoma City,OK,1201
10,Dallas,TX,430
11,Amarillo,TX,3605
12,St. Louis,MO,466
13,Chicago,IL,597
14,Des Moines,IA,955
15,Minneapolis,MN,830
16,Memphis,TN,337
17,Nashville,TN,597
18,Little Rock,AR,335
19,Las Vegas,NV,2001
20,Phoenix,AZ,1086
21,Flagstaff,AZ,6910
22,Boise,ID,2730
23,Rapid City,SD,3202
24,Billings,MT,3123
";

pub const EDGES_CSV: &str = "\
from_id,to_id,map_distance_miles
0,1,70
0,2,100
0,3,520
0,7,540
0,8,520
0,23,400
1,5,300
2,23,300
2,24,450
3,19,420
3,22,340
4,5,65
4,11,290
4,21,320
5,11,280
19,20,300
19,21,250
20,21,145
6,7,185
6,8,200
6,12,250
6,14,195
7,14,135
7,23,520
14,15,245
13,14,330
13,15,410
12,13,300
12,16,285
12,17,310
16,17,210
16,18,140
18,10,320
10,9,205
9,8,160
9,11,260
9,18,340
23,24,320
22,24,610
15,23,600
";

pub const WEATHER_CSV: &str = "\
city_id,date,condition,risk
0,2025-11-03,Snow,4
0,2025-11-04,Snow,4.5
0,2025-11-05,Flurries,2.5
1,2025-11-04,Snow,4
2,2025-11-03,Blizzard,5
2,2025-11-04,Blizzard,5
2,2025-11-05,Snow,3.5
23,2025-11-04,Snow,4
24,2025-11-05,Snow,4
3,2025-11-10,Rain,2
22,2025-11-10,Rain,2
13,2025-11-12,Thunderstorm,3.5
15,2025-11-12,Sleet,4
15,2025-11-13,Snow,4.5
14,2025-11-13,Sleet,3
7,2025-11-13,Snow,3.5
6,2025-11-14,Rain,2
12,2025-11-14,Rain,2
10,2025-11-18,Sunny,0.5
9,2025-11-18,Sunny,0.5
18,2025-11-18,Sunny,0.5
16,2025-11-18,Sunny,0.5
20,2025-11-20,Sunny,0.5
19,2025-11-20,Sunny,0.5
21,2025-11-20,Clear,0.8
4,2025-11-21,Sunny,0.5
5,2025-11-21,Clear,0.8
11,2025-11-21,Windy,1.5
0,2025-11-24,Snow,3.5
2,2025-11-24,Snow,4
23,2025-11-25,Blizzard,5
24,2025-11-25,Blizzard,5
15,2025-11-26,Snow,4
13,2025-11-27,Snow,3.5
17,2025-11-28,Rain,2
16,2025-11-28,Rain,2
";

//! Per-state reference city lists.
//!
//! Curated from the most populous municipalities in each state. The
//! submission form offers these as the selectable city options; the
//! validation engine treats anything outside the list as invalid for the
//! chosen state.

/// Reference cities keyed by two-letter state code.
pub const CITIES: &[(&str, &[&str])] = &[
    (
        "AL",
        &[
            "Birmingham",
            "Montgomery",
            "Huntsville",
            "Mobile",
            "Tuscaloosa",
            "Hoover",
            "Dothan",
            "Auburn",
            "Decatur",
            "Madison",
        ],
    ),
    (
        "AK",
        &[
            "Anchorage",
            "Fairbanks",
            "Juneau",
            "Wasilla",
            "Sitka",
            "Ketchikan",
            "Kenai",
            "Kodiak",
            "Bethel",
            "Palmer",
        ],
    ),
    (
        "AZ",
        &[
            "Phoenix",
            "Tucson",
            "Mesa",
            "Chandler",
            "Scottsdale",
            "Glendale",
            "Gilbert",
            "Tempe",
            "Peoria",
            "Surprise",
            "Yuma",
            "Flagstaff",
        ],
    ),
    (
        "AR",
        &[
            "Little Rock",
            "Fort Smith",
            "Fayetteville",
            "Springdale",
            "Jonesboro",
            "North Little Rock",
            "Conway",
            "Rogers",
            "Bentonville",
            "Pine Bluff",
        ],
    ),
    (
        "CA",
        &[
            "Los Angeles",
            "San Diego",
            "San Jose",
            "San Francisco",
            "Fresno",
            "Sacramento",
            "Long Beach",
            "Oakland",
            "Bakersfield",
            "Anaheim",
            "Riverside",
            "Santa Ana",
            "Irvine",
            "Stockton",
            "Chula Vista",
            "Fremont",
            "Santa Clarita",
            "San Bernardino",
            "Modesto",
            "Fontana",
        ],
    ),
    (
        "CO",
        &[
            "Denver",
            "Colorado Springs",
            "Aurora",
            "Fort Collins",
            "Lakewood",
            "Thornton",
            "Arvada",
            "Westminster",
            "Pueblo",
            "Greeley",
            "Boulder",
        ],
    ),
    (
        "CT",
        &[
            "Bridgeport",
            "New Haven",
            "Stamford",
            "Hartford",
            "Waterbury",
            "Norwalk",
            "Danbury",
            "New Britain",
            "West Hartford",
            "Greenwich",
        ],
    ),
    (
        "DE",
        &[
            "Wilmington",
            "Dover",
            "Newark",
            "Middletown",
            "Smyrna",
            "Milford",
            "Seaford",
            "Georgetown",
            "Elsmere",
            "New Castle",
        ],
    ),
    ("DC", &["Washington"]),
    (
        "FL",
        &[
            "Jacksonville",
            "Miami",
            "Tampa",
            "Orlando",
            "St. Petersburg",
            "Hialeah",
            "Port St. Lucie",
            "Cape Coral",
            "Tallahassee",
            "Fort Lauderdale",
            "Pembroke Pines",
            "Hollywood",
            "Gainesville",
            "Miramar",
            "Coral Springs",
        ],
    ),
    (
        "GA",
        &[
            "Atlanta",
            "Augusta",
            "Columbus",
            "Macon",
            "Savannah",
            "Athens",
            "Sandy Springs",
            "Roswell",
            "Johns Creek",
            "Albany",
            "Warner Robins",
        ],
    ),
    (
        "HI",
        &[
            "Honolulu",
            "Pearl City",
            "Hilo",
            "Kailua",
            "Waipahu",
            "Kaneohe",
            "Mililani",
            "Kahului",
            "Ewa Beach",
            "Kihei",
        ],
    ),
    (
        "ID",
        &[
            "Boise",
            "Meridian",
            "Nampa",
            "Idaho Falls",
            "Pocatello",
            "Caldwell",
            "Coeur d'Alene",
            "Twin Falls",
            "Lewiston",
            "Post Falls",
        ],
    ),
    (
        "IL",
        &[
            "Chicago",
            "Aurora",
            "Joliet",
            "Naperville",
            "Rockford",
            "Springfield",
            "Elgin",
            "Peoria",
            "Champaign",
            "Waukegan",
            "Cicero",
            "Bloomington",
        ],
    ),
    (
        "IN",
        &[
            "Indianapolis",
            "Fort Wayne",
            "Evansville",
            "South Bend",
            "Carmel",
            "Fishers",
            "Bloomington",
            "Hammond",
            "Gary",
            "Lafayette",
        ],
    ),
    (
        "IA",
        &[
            "Des Moines",
            "Cedar Rapids",
            "Davenport",
            "Sioux City",
            "Iowa City",
            "Waterloo",
            "Ames",
            "West Des Moines",
            "Council Bluffs",
            "Ankeny",
        ],
    ),
    (
        "KS",
        &[
            "Wichita",
            "Overland Park",
            "Kansas City",
            "Olathe",
            "Topeka",
            "Lawrence",
            "Shawnee",
            "Manhattan",
            "Lenexa",
            "Salina",
        ],
    ),
    (
        "KY",
        &[
            "Louisville",
            "Lexington",
            "Bowling Green",
            "Owensboro",
            "Covington",
            "Richmond",
            "Georgetown",
            "Florence",
            "Hopkinsville",
            "Nicholasville",
        ],
    ),
    (
        "LA",
        &[
            "New Orleans",
            "Baton Rouge",
            "Shreveport",
            "Lafayette",
            "Lake Charles",
            "Kenner",
            "Bossier City",
            "Monroe",
            "Alexandria",
            "Houma",
        ],
    ),
    (
        "ME",
        &[
            "Portland",
            "Lewiston",
            "Bangor",
            "South Portland",
            "Auburn",
            "Biddeford",
            "Sanford",
            "Saco",
            "Augusta",
            "Westbrook",
        ],
    ),
    (
        "MD",
        &[
            "Baltimore",
            "Columbia",
            "Germantown",
            "Silver Spring",
            "Waldorf",
            "Glen Burnie",
            "Frederick",
            "Ellicott City",
            "Gaithersburg",
            "Rockville",
            "Annapolis",
        ],
    ),
    (
        "MA",
        &[
            "Boston",
            "Worcester",
            "Springfield",
            "Cambridge",
            "Lowell",
            "Brockton",
            "Quincy",
            "Lynn",
            "New Bedford",
            "Fall River",
            "Newton",
            "Somerville",
        ],
    ),
    (
        "MI",
        &[
            "Detroit",
            "Grand Rapids",
            "Warren",
            "Sterling Heights",
            "Ann Arbor",
            "Lansing",
            "Flint",
            "Dearborn",
            "Livonia",
            "Troy",
            "Westland",
        ],
    ),
    (
        "MN",
        &[
            "Minneapolis",
            "St. Paul",
            "Rochester",
            "Duluth",
            "Bloomington",
            "Brooklyn Park",
            "Plymouth",
            "Woodbury",
            "Maple Grove",
            "St. Cloud",
        ],
    ),
    (
        "MS",
        &[
            "Jackson",
            "Gulfport",
            "Southaven",
            "Biloxi",
            "Hattiesburg",
            "Olive Branch",
            "Tupelo",
            "Meridian",
            "Greenville",
            "Madison",
        ],
    ),
    (
        "MO",
        &[
            "Kansas City",
            "St. Louis",
            "Springfield",
            "Columbia",
            "Independence",
            "Lee's Summit",
            "O'Fallon",
            "St. Joseph",
            "St. Charles",
            "Blue Springs",
        ],
    ),
    (
        "MT",
        &[
            "Billings",
            "Missoula",
            "Great Falls",
            "Bozeman",
            "Butte",
            "Helena",
            "Kalispell",
            "Havre",
            "Anaconda",
            "Miles City",
        ],
    ),
    (
        "NE",
        &[
            "Omaha",
            "Lincoln",
            "Bellevue",
            "Grand Island",
            "Kearney",
            "Fremont",
            "Hastings",
            "Norfolk",
            "North Platte",
            "Papillion",
        ],
    ),
    (
        "NV",
        &[
            "Las Vegas",
            "Henderson",
            "Reno",
            "North Las Vegas",
            "Sparks",
            "Carson City",
            "Fernley",
            "Elko",
            "Mesquite",
            "Boulder City",
        ],
    ),
    (
        "NH",
        &[
            "Manchester",
            "Nashua",
            "Concord",
            "Derry",
            "Dover",
            "Rochester",
            "Salem",
            "Merrimack",
            "Londonderry",
            "Hudson",
        ],
    ),
    (
        "NJ",
        &[
            "Newark",
            "Jersey City",
            "Paterson",
            "Elizabeth",
            "Edison",
            "Woodbridge",
            "Lakewood",
            "Toms River",
            "Hamilton",
            "Trenton",
            "Clifton",
            "Camden",
        ],
    ),
    (
        "NM",
        &[
            "Albuquerque",
            "Las Cruces",
            "Rio Rancho",
            "Santa Fe",
            "Roswell",
            "Farmington",
            "Clovis",
            "Hobbs",
            "Alamogordo",
            "Carlsbad",
        ],
    ),
    (
        "NY",
        &[
            "New York",
            "Buffalo",
            "Rochester",
            "Yonkers",
            "Syracuse",
            "Albany",
            "New Rochelle",
            "Mount Vernon",
            "Schenectady",
            "Utica",
            "White Plains",
            "Troy",
        ],
    ),
    (
        "NC",
        &[
            "Charlotte",
            "Raleigh",
            "Greensboro",
            "Durham",
            "Winston-Salem",
            "Fayetteville",
            "Cary",
            "Wilmington",
            "High Point",
            "Concord",
            "Asheville",
        ],
    ),
    (
        "ND",
        &[
            "Fargo",
            "Bismarck",
            "Grand Forks",
            "Minot",
            "West Fargo",
            "Williston",
            "Dickinson",
            "Mandan",
            "Jamestown",
            "Wahpeton",
        ],
    ),
    (
        "OH",
        &[
            "Columbus",
            "Cleveland",
            "Cincinnati",
            "Toledo",
            "Akron",
            "Dayton",
            "Parma",
            "Canton",
            "Youngstown",
            "Lorain",
            "Hamilton",
        ],
    ),
    (
        "OK",
        &[
            "Oklahoma City",
            "Tulsa",
            "Norman",
            "Broken Arrow",
            "Edmond",
            "Lawton",
            "Moore",
            "Midwest City",
            "Stillwater",
            "Enid",
        ],
    ),
    (
        "OR",
        &[
            "Portland",
            "Salem",
            "Eugene",
            "Gresham",
            "Hillsboro",
            "Bend",
            "Beaverton",
            "Medford",
            "Springfield",
            "Corvallis",
        ],
    ),
    (
        "PA",
        &[
            "Philadelphia",
            "Pittsburgh",
            "Allentown",
            "Erie",
            "Reading",
            "Scranton",
            "Bethlehem",
            "Lancaster",
            "Harrisburg",
            "Altoona",
            "York",
        ],
    ),
    (
        "RI",
        &[
            "Providence",
            "Warwick",
            "Cranston",
            "Pawtucket",
            "East Providence",
            "Woonsocket",
            "Coventry",
            "Cumberland",
            "North Providence",
            "South Kingstown",
        ],
    ),
    (
        "SC",
        &[
            "Charleston",
            "Columbia",
            "North Charleston",
            "Mount Pleasant",
            "Rock Hill",
            "Greenville",
            "Summerville",
            "Goose Creek",
            "Sumter",
            "Florence",
        ],
    ),
    (
        "SD",
        &[
            "Sioux Falls",
            "Rapid City",
            "Aberdeen",
            "Brookings",
            "Watertown",
            "Mitchell",
            "Yankton",
            "Pierre",
            "Huron",
            "Spearfish",
        ],
    ),
    (
        "TN",
        &[
            "Nashville",
            "Memphis",
            "Knoxville",
            "Chattanooga",
            "Clarksville",
            "Murfreesboro",
            "Franklin",
            "Jackson",
            "Johnson City",
            "Bartlett",
        ],
    ),
    (
        "TX",
        &[
            "Houston",
            "San Antonio",
            "Dallas",
            "Austin",
            "Fort Worth",
            "El Paso",
            "Arlington",
            "Corpus Christi",
            "Plano",
            "Laredo",
            "Lubbock",
            "Garland",
            "Irving",
            "Amarillo",
            "Grand Prairie",
            "Brownsville",
            "McKinney",
            "Frisco",
        ],
    ),
    (
        "UT",
        &[
            "Salt Lake City",
            "West Valley City",
            "Provo",
            "West Jordan",
            "Orem",
            "Sandy",
            "Ogden",
            "St. George",
            "Layton",
            "South Jordan",
        ],
    ),
    (
        "VT",
        &[
            "Burlington",
            "South Burlington",
            "Rutland",
            "Essex Junction",
            "Barre",
            "Montpelier",
            "Winooski",
            "St. Albans",
            "Newport",
            "Vergennes",
        ],
    ),
    (
        "VA",
        &[
            "Virginia Beach",
            "Norfolk",
            "Chesapeake",
            "Richmond",
            "Newport News",
            "Alexandria",
            "Hampton",
            "Roanoke",
            "Portsmouth",
            "Suffolk",
            "Lynchburg",
        ],
    ),
    (
        "WA",
        &[
            "Seattle",
            "Spokane",
            "Tacoma",
            "Vancouver",
            "Bellevue",
            "Kent",
            "Everett",
            "Renton",
            "Spokane Valley",
            "Federal Way",
            "Yakima",
            "Bellingham",
        ],
    ),
    (
        "WV",
        &[
            "Charleston",
            "Huntington",
            "Morgantown",
            "Parkersburg",
            "Wheeling",
            "Martinsburg",
            "Fairmont",
            "Beckley",
            "Clarksburg",
            "South Charleston",
        ],
    ),
    (
        "WI",
        &[
            "Milwaukee",
            "Madison",
            "Green Bay",
            "Kenosha",
            "Racine",
            "Appleton",
            "Waukesha",
            "Eau Claire",
            "Oshkosh",
            "Janesville",
        ],
    ),
    (
        "WY",
        &[
            "Cheyenne",
            "Casper",
            "Laramie",
            "Gillette",
            "Rock Springs",
            "Sheridan",
            "Green River",
            "Evanston",
            "Riverton",
            "Jackson",
        ],
    ),
    (
        "PR",
        &[
            "San Juan",
            "Bayamon",
            "Carolina",
            "Ponce",
            "Caguas",
            "Guaynabo",
            "Arecibo",
            "Toa Baja",
            "Mayaguez",
            "Trujillo Alto",
        ],
    ),
    (
        "GU",
        &[
            "Hagatna",
            "Dededo",
            "Yigo",
            "Tamuning",
            "Mangilao",
            "Barrigada",
            "Santa Rita",
            "Agat",
            "Chalan Pago",
            "Sinajana",
        ],
    ),
    (
        "VI",
        &[
            "Charlotte Amalie",
            "Christiansted",
            "Frederiksted",
            "Cruz Bay",
            "Anna's Retreat",
            "Red Hook",
        ],
    ),
];

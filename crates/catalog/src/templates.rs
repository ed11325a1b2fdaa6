//! Built-in product template sets, one list per department.

use crate::ProductTemplate;

const E_BIKES: &[(&str, &str)] = &[
    (
        "Ridgeline Commuter E-500",
        "Step-through commuter e-bike with a 500 Wh battery and integrated lights",
    ),
    (
        "Summit Trail E-MTB 29",
        "Full-suspension electric mountain bike with 29-inch wheels and a torque-sensing mid-drive",
    ),
    (
        "Canyon Cargo Hauler",
        "Long-tail electric cargo bike rated for 60 kg of rear load",
    ),
    (
        "Foothill Gravel E-1",
        "Drop-bar gravel e-bike with a lightweight hub motor and 45 mm tire clearance",
    ),
    (
        "Switchback Hardtail E-27",
        "Hardtail trail e-bike with a 27.5-inch wheelset and four assist modes",
    ),
    (
        "Harbor Folding E-Compact",
        "Folding 20-inch e-bike that fits under a desk or in a car trunk",
    ),
    (
        "Alpine Crest E-Enduro",
        "Enduro e-bike with 170 mm of travel and a removable 720 Wh battery",
    ),
    (
        "Meadow Cruiser E-Step",
        "Relaxed-geometry cruiser e-bike with a rear rack and swept-back bars",
    ),
];

const KAYAKS: &[(&str, &str)] = &[
    (
        "Driftwater Touring 14",
        "Fourteen-foot touring kayak with dual bulkheads and a drop-down skeg",
    ),
    (
        "Stillwater Angler Pro",
        "Pedal-drive fishing kayak with rod holders and a standing platform",
    ),
    (
        "Rapidline Creeker 9",
        "Nine-foot whitewater creek boat with aggressive rocker and a reinforced hull",
    ),
    (
        "Laketrip Tandem 13",
        "Stable tandem sit-on-top for calm lakes and slow rivers",
    ),
    (
        "Coastline Sea Tour 17",
        "Seventeen-foot composite sea kayak with a rudder and day hatch",
    ),
    (
        "Packraft Featherlite",
        "Inflatable packraft under three kilograms for backcountry crossings",
    ),
    (
        "Eddyline Play 8",
        "Playful river-runner with a planing hull and adjustable thigh braces",
    ),
    (
        "Baywind Recreational 10",
        "Ten-foot recreational kayak with a wide cockpit and padded seat",
    ),
];

const TRAIL_SNACKS: &[(&str, &str)] = &[
    (
        "Summit Oat Bar 12-Pack",
        "Chewy oat and honey bars in a trail-ready twelve pack",
    ),
    (
        "Peak Fuel Espresso Gel",
        "Single-shot energy gel with 100 mg of caffeine",
    ),
    (
        "Ridgeway Jerky Original",
        "Slow-smoked beef jerky with no added nitrates",
    ),
    (
        "Wildberry Trail Mix 1kg",
        "Berry-heavy trail mix with almonds and dark chocolate",
    ),
    (
        "Basecamp Ramen Duo",
        "Freeze-dried ramen duo pack for camp stoves",
    ),
    (
        "Glacier Electrolyte Chews",
        "Citrus electrolyte chews packed in ten-serving sleeves",
    ),
    (
        "Switchback Nut Butter Flight",
        "Variety flight of single-serve nut butter pouches",
    ),
    (
        "Alpine Start Granola",
        "Small-batch granola with freeze-dried strawberries",
    ),
];

const BINOCULARS: &[(&str, &str)] = &[
    (
        "Crestview 8x42 ED",
        "All-round 8x42 binocular with extra-low-dispersion glass",
    ),
    (
        "Ridgehawk 10x50 HD",
        "High-light 10x50 binocular for dawn and dusk glassing",
    ),
    (
        "Marshlight 8x32 Compact",
        "Compact 8x32 binocular for birders who count grams",
    ),
    (
        "Summitline 12x50 Rangefinder",
        "12x50 binocular with an integrated 1800 m laser rangefinder",
    ),
    (
        "Harborview 7x50 Marine",
        "Nitrogen-purged marine binocular with an internal compass",
    ),
    (
        "Valleyscope 10x42 Pro",
        "Flagship 10x42 binocular with field-flattener lenses and a locking diopter",
    ),
    (
        "Trailglass 8x25 Pocket",
        "Pocket-folding 8x25 binocular that fits a jacket chest pocket",
    ),
    (
        "Duskwatch 15x56 Astro",
        "Tripod-ready 15x56 binocular for star fields and long-range spotting",
    ),
];

const HEADLAMPS: &[(&str, &str)] = &[
    (
        "Nightline 400 Core",
        "400-lumen rechargeable headlamp with a reactive beam mode",
    ),
    (
        "Ridgerunner 900 Trail",
        "Trail-running headlamp with a 900-lumen boost and rear red light",
    ),
    (
        "Cavelight 1200 Duo",
        "Dual-beam caving lamp with a remote battery pack",
    ),
    (
        "Basecamp Mini 150",
        "Palm-sized 150-lumen lamp for around-camp chores",
    ),
    (
        "Stormbeam 600 IPX8",
        "Fully submersible 600-lumen lamp with a glove-friendly switch",
    ),
    (
        "Dawnpatrol 500 Hybrid",
        "Hybrid headlamp running on a core battery or three AAA cells",
    ),
    (
        "Glowline Kids 120",
        "Kid-sized headlamp with a breakaway strap and tilting head",
    ),
    (
        "Duskrunner 800 Focus",
        "800-lumen headlamp with stepless beam focus and a lockout mode",
    ),
];

const WATER_BOTTLES: &[(&str, &str)] = &[
    (
        "Cascade Steel 750",
        "Vacuum-insulated 750 ml steel bottle that keeps drinks cold for 24 hours",
    ),
    (
        "Trailflow Squeeze 650",
        "Soft squeeze bottle with a high-flow race cap",
    ),
    (
        "Glacierpress Filter Bottle",
        "Press-style filter bottle rated for backcountry streams",
    ),
    (
        "Summit Titanium 600",
        "Ultralight single-wall titanium bottle for alpine starts",
    ),
    (
        "Meadow Glass 550",
        "Borosilicate glass bottle with a silicone sleeve",
    ),
    (
        "Ridgeline Growler 1.9L",
        "Insulated growler that holds carbonation for two days",
    ),
    (
        "Creekside Kids 400",
        "Leak-proof kids bottle with a fold-out straw",
    ),
    (
        "Basecamp Mug-Lid 500",
        "Insulated bottle with a twist-on mug lid for camp coffee",
    ),
];

const SLEEPING_BAGS: &[(&str, &str)] = &[
    (
        "Alpenglow Down 15",
        "850-fill down mummy bag rated to 15 degrees Fahrenheit",
    ),
    (
        "Riverbend Synthetic 35",
        "Synthetic three-season bag that shrugs off damp nights",
    ),
    (
        "Summit Quilt 950",
        "Ultralight 950-fill quilt with a closed footbox",
    ),
    (
        "Basecamp Doublewide",
        "Two-person rectangular bag with dual zippers",
    ),
    (
        "Glacier Expedition -20",
        "Expedition bag with draft tubes rated to minus 20 degrees",
    ),
    (
        "Meadowlark Kids 30",
        "Kid-length 30-degree bag with a built-in pillow pocket",
    ),
    (
        "Trailside Liner Thermo",
        "Fleece thermal liner that adds ten degrees to any bag",
    ),
    (
        "Duskfall Hybrid 25",
        "Down-top synthetic-bottom hybrid for hammock campers",
    ),
];

const BACKPACKS: &[(&str, &str)] = &[
    (
        "Switchback 65 Expedition",
        "65-liter expedition pack with an adjustable torso and rain cover",
    ),
    (
        "Crestline 38 Alpine",
        "Stripped-down alpine pack with ice-axe keepers",
    ),
    (
        "Meadow Daylite 22",
        "Everyday 22-liter daypack with a ventilated back panel",
    ),
    (
        "Riverrun Dry Pack 40",
        "Welded-seam dry pack for paddling portages",
    ),
    (
        "Summit Fastpack 30",
        "Running-vest style 30-liter fastpack",
    ),
    (
        "Basecamp Duffel 90",
        "Burly 90-liter duffel with stowable backpack straps",
    ),
    (
        "Trailhead Kids 14",
        "Kid-sized 14-liter pack with a whistle buckle",
    ),
    (
        "Ridgeline Commute 28",
        "Laptop-friendly commuter pack with a weatherproof roll top",
    ),
];

const GPS_WATCHES: &[(&str, &str)] = &[
    (
        "Waypoint Solar Pro",
        "Multiband GPS watch with solar charging and offline topo maps",
    ),
    (
        "Trailpulse 2",
        "Trail-running watch with climb pacing and a 30-hour GPS battery",
    ),
    (
        "Summitline Alti X",
        "Mountaineering watch with barometric storm alerts",
    ),
    (
        "Openwater Swim GPS",
        "Open-water swim watch with stroke detection",
    ),
    (
        "Basecamp Navigator Lite",
        "Entry GPS watch with breadcrumb navigation",
    ),
    (
        "Ridgerunner Ultra 50",
        "Ultramarathon watch rated for 50 hours of full GPS",
    ),
    (
        "Duskwatch Expedition",
        "Expedition watch with a three-week smartwatch battery",
    ),
    (
        "Creekside Kids Tracker",
        "Kid-friendly GPS tracker watch with geofence alerts",
    ),
];

fn expand(department: &str, entries: &[(&str, &str)]) -> Vec<ProductTemplate> {
    entries
        .iter()
        .map(|(name, description)| ProductTemplate::new(name, description, department))
        .collect()
}

/// Templates for the "E-Bikes" department.
pub fn e_bikes() -> Vec<ProductTemplate> {
    expand("E-Bikes", E_BIKES)
}

/// Templates for the "Kayaks" department.
pub fn kayaks() -> Vec<ProductTemplate> {
    expand("Kayaks", KAYAKS)
}

/// Templates for the "Trail Snacks" department.
pub fn trail_snacks() -> Vec<ProductTemplate> {
    expand("Trail Snacks", TRAIL_SNACKS)
}

/// Templates for the "Binoculars" department.
pub fn binoculars() -> Vec<ProductTemplate> {
    expand("Binoculars", BINOCULARS)
}

/// Templates for the "Headlamps" department.
pub fn headlamps() -> Vec<ProductTemplate> {
    expand("Headlamps", HEADLAMPS)
}

/// Templates for the "Water Bottles" department.
pub fn water_bottles() -> Vec<ProductTemplate> {
    expand("Water Bottles", WATER_BOTTLES)
}

/// Templates for the "Sleeping Bags" department.
pub fn sleeping_bags() -> Vec<ProductTemplate> {
    expand("Sleeping Bags", SLEEPING_BAGS)
}

/// Templates for the "Backpacks" department.
pub fn backpacks() -> Vec<ProductTemplate> {
    expand("Backpacks", BACKPACKS)
}

/// Templates for the "GPS Watches" department.
pub fn gps_watches() -> Vec<ProductTemplate> {
    expand("GPS Watches", GPS_WATCHES)
}

/// All built-in templates in the fixed concatenation order.
///
/// Downstream id assignment walks this list front to back, so the order here
/// is load-bearing and must not be reshuffled.
pub fn all_templates() -> Vec<ProductTemplate> {
    let mut all = e_bikes();
    all.extend(kayaks());
    all.extend(trail_snacks());
    all.extend(binoculars());
    all.extend(headlamps());
    all.extend(water_bottles());
    all.extend(sleeping_bags());
    all.extend(backpacks());
    all.extend(gps_watches());
    all
}

//! Built-in species catalog.

use super::{Difficulty, Humidity, LightLevel, Species, WaterAmount};

const SPRING_TO_AUTUMN: [u8; 7] = [3, 4, 5, 6, 7, 8, 9];
const SUMMER: [u8; 5] = [4, 5, 6, 7, 8];

struct Entry {
    id: &'static str,
    common_name: &'static str,
    botanical_name: &'static str,
    family: &'static str,
    difficulty: Difficulty,
    light: LightLevel,
    water: (u32, WaterAmount),
    humidity: Humidity,
    fertilize: (u32, &'static [u8]),
    repot_years: u32,
    toxic_pets: bool,
    tips: &'static [&'static str],
}

impl From<&Entry> for Species {
    fn from(e: &Entry) -> Self {
        Species {
            id: e.id.to_string(),
            common_name: e.common_name.to_string(),
            botanical_name: e.botanical_name.to_string(),
            family: e.family.to_string(),
            difficulty: e.difficulty,
            light: e.light,
            water_frequency_days: e.water.0,
            water_amount: e.water.1,
            humidity: e.humidity,
            fertilize_frequency_days: e.fertilize.0,
            fertilize_months: e.fertilize.1.to_vec(),
            repot_frequency_years: e.repot_years,
            toxic_pets: e.toxic_pets,
            care_tips: e.tips.iter().map(|t| t.to_string()).collect(),
        }
    }
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "monstera-deliciosa",
        common_name: "Swiss Cheese Plant",
        botanical_name: "Monstera deliciosa",
        family: "Araceae",
        difficulty: Difficulty::Easy,
        light: LightLevel::Bright,
        water: (7, WaterAmount::Moderate),
        humidity: Humidity::Medium,
        fertilize: (14, &SPRING_TO_AUTUMN),
        repot_years: 2,
        toxic_pets: true,
        tips: &["Let the top 3 cm of soil dry out between waterings", "Wipe leaves to keep pores clear"],
    },
    Entry {
        id: "epipremnum-aureum",
        common_name: "Golden Pothos",
        botanical_name: "Epipremnum aureum",
        family: "Araceae",
        difficulty: Difficulty::Easy,
        light: LightLevel::Medium,
        water: (7, WaterAmount::Moderate),
        humidity: Humidity::Medium,
        fertilize: (30, &SPRING_TO_AUTUMN),
        repot_years: 2,
        toxic_pets: true,
        tips: &["Drooping leaves mean it is thirsty"],
    },
    Entry {
        id: "dracaena-trifasciata",
        common_name: "Snake Plant",
        botanical_name: "Dracaena trifasciata",
        family: "Asparagaceae",
        difficulty: Difficulty::Easy,
        light: LightLevel::Low,
        water: (14, WaterAmount::Little),
        humidity: Humidity::Low,
        fertilize: (60, &SUMMER),
        repot_years: 3,
        toxic_pets: true,
        tips: &["Overwatering is the most common cause of rot"],
    },
    Entry {
        id: "calathea-orbifolia",
        common_name: "Calathea Orbifolia",
        botanical_name: "Goeppertia orbifolia",
        family: "Marantaceae",
        difficulty: Difficulty::Hard,
        light: LightLevel::Medium,
        water: (5, WaterAmount::Moderate),
        humidity: Humidity::High,
        fertilize: (30, &SPRING_TO_AUTUMN),
        repot_years: 2,
        toxic_pets: false,
        tips: &["Use filtered or rain water", "Crispy edges mean the air is too dry"],
    },
    Entry {
        id: "nephrolepis-exaltata",
        common_name: "Boston Fern",
        botanical_name: "Nephrolepis exaltata",
        family: "Nephrolepidaceae",
        difficulty: Difficulty::Medium,
        light: LightLevel::Medium,
        water: (3, WaterAmount::Much),
        humidity: Humidity::High,
        fertilize: (30, &SUMMER),
        repot_years: 1,
        toxic_pets: false,
        tips: &["Keep the soil evenly moist"],
    },
    Entry {
        id: "ficus-lyrata",
        common_name: "Fiddle-Leaf Fig",
        botanical_name: "Ficus lyrata",
        family: "Moraceae",
        difficulty: Difficulty::Hard,
        light: LightLevel::Bright,
        water: (7, WaterAmount::Moderate),
        humidity: Humidity::Medium,
        fertilize: (30, &SPRING_TO_AUTUMN),
        repot_years: 2,
        toxic_pets: true,
        tips: &["Avoid moving it once it has settled", "Rotate a quarter turn each month"],
    },
    Entry {
        id: "spathiphyllum-wallisii",
        common_name: "Peace Lily",
        botanical_name: "Spathiphyllum wallisii",
        family: "Araceae",
        difficulty: Difficulty::Easy,
        light: LightLevel::Low,
        water: (5, WaterAmount::Much),
        humidity: Humidity::High,
        fertilize: (42, &SPRING_TO_AUTUMN),
        repot_years: 2,
        toxic_pets: true,
        tips: &["Leaves droop visibly when it needs water"],
    },
    Entry {
        id: "aloe-vera",
        common_name: "Aloe Vera",
        botanical_name: "Aloe barbadensis miller",
        family: "Asphodelaceae",
        difficulty: Difficulty::Easy,
        light: LightLevel::Direct,
        water: (21, WaterAmount::Little),
        humidity: Humidity::Low,
        fertilize: (90, &SUMMER),
        repot_years: 3,
        toxic_pets: true,
        tips: &["Use cactus soil and a pot with drainage"],
    },
    Entry {
        id: "phalaenopsis",
        common_name: "Moth Orchid",
        botanical_name: "Phalaenopsis amabilis",
        family: "Orchidaceae",
        difficulty: Difficulty::Medium,
        light: LightLevel::Bright,
        water: (7, WaterAmount::Little),
        humidity: Humidity::High,
        fertilize: (14, &SPRING_TO_AUTUMN),
        repot_years: 2,
        toxic_pets: false,
        tips: &["Soak the roots for ten minutes, then drain fully"],
    },
];

pub(super) fn builtin_species() -> Vec<Species> {
    ENTRIES.iter().map(Species::from).collect()
}

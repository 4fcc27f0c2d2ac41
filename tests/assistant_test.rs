use agriclimate_assistant::assistant::{AnalysisResult, AnswerData, DataAssistant, DataType};
use agriclimate_assistant::catalog::Catalog;
use agriclimate_assistant::loader::Datasets;
use polars::prelude::*;

fn rainfall_frame() -> DataFrame {
    df![
        "District" => [
            "Chennai", "Coimbatore", "Nilgiris", "Madurai", "Salem",
            "Erode", "Theni", "Vellore", "State Average",
        ],
        "Actual Rainfall in South West Monsoon (June'17 to September'17) in mm" => [
            420.0, 310.0, 980.0, 290.0, 350.0, 330.0, 400.0, 370.0, 430.0,
        ],
        "Actual Rainfall in North East Monsoon (October'17 to December'17) in mm" => [
            780.0, 340.0, 620.0, 380.0, 300.0, 310.0, 280.0, 330.0, 450.0,
        ],
        "Total Actual Rainfall (June'17 to May'18) in mm" => [
            1350.0, 760.0, 1880.0, 820.0, 710.0, 700.0, 640.0, 905.0, 910.0,
        ],
    ]
    .unwrap()
}

fn crop_frame() -> DataFrame {
    df![
        "District" => [
            "Paddy", "Maize", "Ragi", "Jowar", "Sugarcane", "Cotton",
            "Groundnut", "Bajra", "Pulses", "Banana", "Coconut", "Tapioca",
        ],
        "Area (Ha)" => [
            1845.0, 320.0, 95.0, 120.0, 310.0, 135.0,
            340.0, 60.0, 540.0, 85.0, 440.0, 105.0,
        ],
        "Production (Tonnes)" => [
            7115.0, 1950.0, 310.0, 150.0, 9500.0, 410.0,
            990.0, 105.0, 290.0, 5100.0, 6200.0, 4800.0,
        ],
        // Cotton carries a zero productivity cell on purpose.
        "Productivity. (Tonnes/Ha)" => [
            3857.0, 6094.0, 3263.0, 1250.0, 30645.0, 0.0,
            2912.0, 1750.0, 537.0, 60000.0, 14091.0, 45714.0,
        ],
    ]
    .unwrap()
}

fn assistant() -> DataAssistant {
    let datasets = Datasets::from_frames(rainfall_frame(), crop_frame()).unwrap();
    DataAssistant::new(datasets, Catalog::default())
}

fn table(result: &AnalysisResult) -> &DataFrame {
    match result.data.as_ref().expect("expected a data slice") {
        AnswerData::Table(df) => df,
        AnswerData::Both { .. } => panic!("expected a single table, got both"),
    }
}

#[test]
fn exact_greeting_gets_the_greeting_reply() {
    let bot = assistant();
    for input in ["hi", "hello", " HEY ", "good morning", "good evening"] {
        let result = bot.answer(input);
        assert!(result.text.contains("Hello there"), "input: {input}");
        assert!(result.data.is_none());
    }
}

#[test]
fn embedded_greeting_does_not_trigger_the_greeting_rule() {
    let bot = assistant();
    let result = bot.answer("hi, which district gets the most rainfall?");
    assert!(!result.text.contains("Hello there"));
    assert!(result.text.contains("highest average rainfall"));
}

#[test]
fn off_domain_questions_get_the_capability_reply_and_no_data() {
    let bot = assistant();
    for input in ["qwertyzxy", "tell me a joke", "what is the capital of France? 🤔"] {
        let result = bot.answer(input);
        assert!(
            result.text.contains("not designed for general conversation"),
            "input: {input}"
        );
        assert!(result.data.is_none());
        assert!(result.data_type.is_none());
    }
}

#[test]
fn farewell_and_thanks_get_the_farewell_reply() {
    let bot = assistant();
    assert!(bot.answer("bye").text.contains("wonderful day"));
    assert!(bot.answer("Thank you!").text.contains("wonderful day"));
}

#[test]
fn small_talk_and_identity_replies() {
    let bot = assistant();
    assert!(bot.answer("how are you?").text.contains("doing great"));
    assert!(bot.answer("who are you").text.contains("AgriClimateBot"));
    assert!(bot.answer("who made you?").text.contains("AgriClimate Intelligence team"));
}

#[test]
fn superlative_names_the_max_mean_district() {
    let bot = assistant();
    let result = bot.answer("Which district has highest rainfall?");
    assert!(result.text.contains("**Nilgiris**"));
    assert!(result.text.contains("1880.00 mm"));
    assert_eq!(result.data_type, Some(DataType::Rainfall));
}

#[test]
fn superlative_tie_keeps_the_first_occurrence() {
    let rainfall = df![
        "District" => ["Ariyalur", "Nilgiris", "Kanyakumari"],
        "Total Actual Rainfall (June'17 to May'18) in mm" => [1000.0, 1500.0, 1500.0],
    ]
    .unwrap();
    let datasets = Datasets::from_frames(rainfall, crop_frame()).unwrap();
    let bot = DataAssistant::new(datasets, Catalog::default());

    let result = bot.answer("Which district has the highest rainfall?");
    assert!(result.text.contains("**Nilgiris**"));
    assert!(!result.text.contains("Kanyakumari"));
    assert!(result.text.contains("1500.00 mm"));
}

#[test]
fn superlative_on_unusable_totals_warns_instead_of_crashing() {
    let rainfall = DataFrame::new(vec![
        Series::new("District", &["Ariyalur", "Perambalur"]),
        Series::new("Total Rainfall (mm)", &[None::<f64>, None::<f64>]),
    ])
    .unwrap();
    let datasets = Datasets::from_frames(rainfall, crop_frame()).unwrap();
    let bot = DataAssistant::new(datasets, Catalog::default());

    let result = bot.answer("Which district has the highest rainfall?");
    assert!(result.text.contains("empty or invalid after cleaning"));
    assert!(result.data.is_none());
}

#[test]
fn single_district_reports_figures_and_distance_above_state_average() {
    let bot = assistant();
    let result = bot.answer("What is the rainfall in Chennai?");
    assert!(result.text.contains("Rainfall Analysis for Chennai"));
    assert!(result.text.contains("**Total Annual Rainfall**: 1350.0 mm"));
    assert!(result.text.contains("**South West Monsoon (June-Sept)**: 420.0 mm"));
    // 1350.0 - 910.0 against the sentinel row.
    assert!(result.text.contains("**440.0 mm above** the state average"));
    assert_eq!(table(&result).height(), 1);
}

#[test]
fn single_district_below_the_state_average() {
    let bot = assistant();
    let result = bot.answer("How much rain does Salem get?");
    assert!(result.text.contains("**200.0 mm below** the state average"));
}

#[test]
fn two_districts_compare_with_the_higher_one_named() {
    let bot = assistant();
    let result = bot.answer("Compare rainfall between Chennai and Coimbatore");
    assert!(result.text.contains("Rainfall Comparison"));
    assert!(result.text.contains("| **Chennai** | 1350.0 mm |"));
    assert!(result.text.contains("| **Coimbatore** | 760.0 mm |"));
    assert!(result.text.contains("Chennai received **590.0 mm more**"));
    assert_eq!(table(&result).height(), 2);
}

#[test]
fn two_district_tie_reports_second_as_higher() {
    let rainfall = df![
        "District" => ["Chennai", "Salem", "State Average"],
        "Total Actual Rainfall (June'17 to May'18) in mm" => [900.0, 900.0, 880.0],
    ]
    .unwrap();
    let datasets = Datasets::from_frames(rainfall, crop_frame()).unwrap();
    let bot = DataAssistant::new(datasets, Catalog::default());

    let result = bot.answer("Compare rainfall in Chennai and Salem");
    // Salem is the second-named district in table order; the tie rule keeps
    // labeling it as higher with a zero difference.
    assert!(result.text.contains("Salem received **0.0 mm more**"));
}

#[test]
fn three_or_more_districts_return_only_the_count_and_slice() {
    let bot = assistant();
    let result = bot.answer("Show rainfall for Chennai, Salem and Madurai");
    assert!(result.text.contains("Showing rainfall data for 3 districts"));
    assert!(!result.text.contains("Total Annual Rainfall"));
    assert_eq!(table(&result).height(), 3);
}

#[test]
fn top_five_ranking_excludes_the_sentinel_and_is_descending() {
    let bot = assistant();
    let result = bot.answer("Show me the top 5 highest rainfall districts");
    assert!(result.text.contains("Top 5 Districts by Rainfall"));
    assert!(!result.text.contains("State Average"));
    assert!(result.text.contains("1. **Nilgiris**: 1880.0 mm"));
    assert!(result.text.contains("2. **Chennai**: 1350.0 mm"));
    assert!(result.text.contains("5. **Coimbatore**: 760.0 mm"));
    assert!(!result.text.contains("6. "));
    assert_eq!(table(&result).height(), 5);
}

#[test]
fn lowest_ranking_starts_from_the_driest_district() {
    let bot = assistant();
    let result = bot.answer("Show districts with lowest rainfall");
    assert!(result.text.contains("Districts with Lowest Rainfall"));
    assert!(result.text.contains("1. **Theni**: 640.0 mm"));
    assert!(!result.text.contains("State Average"));
}

#[test]
fn average_prefers_the_sentinel_row() {
    let bot = assistant();
    let result = bot.answer("What is the average rainfall?");
    assert!(result.text.contains("**Average Annual Rainfall**: 910.0 mm"));
    assert_eq!(table(&result).height(), 1);
}

#[test]
fn average_falls_back_to_a_computed_mean_without_a_sentinel() {
    let rainfall = df![
        "District" => ["Chennai", "Salem"],
        "Total Actual Rainfall (June'17 to May'18) in mm" => [1000.0, 500.0],
    ]
    .unwrap();
    let datasets = Datasets::from_frames(rainfall, crop_frame()).unwrap();
    let bot = DataAssistant::new(datasets, Catalog::default());

    let result = bot.answer("What is the mean rainfall?");
    assert!(result.text.contains("**Calculated Average**: 750.0 mm (across 2 districts)"));
}

#[test]
fn generic_rainfall_question_lists_the_seasonal_fields() {
    let bot = assistant();
    let result = bot.answer("show me rainfall please");
    assert!(result.text.contains("District Rainfall Data"));
    assert!(result.text.contains("South West Monsoon (June-September)"));
    assert_eq!(result.data_type, Some(DataType::Rainfall));
}

#[test]
fn mentioned_crop_reports_area_production_and_productivity() {
    let bot = assistant();
    let result = bot.answer("What is paddy production?");
    assert!(result.text.contains("Crop Production Analysis"));
    assert!(result.text.contains("### Paddy"));
    assert!(result.text.contains("**Area Under Cultivation**: 1845.00 thousand hectares"));
    assert!(result.text.contains("**Total Production**: 7115.00 thousand metric tonnes"));
    assert!(result.text.contains("**Productivity**: 3857 kg per hectare"));
    assert_eq!(result.data_type, Some(DataType::Crops));
}

#[test]
fn crop_production_ranking_honors_the_rank_count_phrase() {
    let bot = assistant();
    let result = bot.answer("Show top 5 crops by production");
    assert!(result.text.contains("Top 5 Crops by Production"));
    assert!(result.text.contains("1. **Sugarcane**: 9500.00 thousand MT"));
    assert!(result.text.contains("2. **Paddy**: 7115.00 thousand MT"));
    assert!(!result.text.contains("6. "));
    assert_eq!(table(&result).height(), 5);
}

#[test]
fn productivity_ranking_excludes_non_positive_rows() {
    let bot = assistant();
    let result = bot.answer("Which crops have the highest productivity?");
    assert!(result.text.contains("Top 10 Crops by Productivity"));
    assert!(result.text.contains("1. **Banana**: 60000 kg/ha"));
    // Cotton's zero-productivity row never enters the ranking.
    assert!(!result.text.contains("Cotton"));
    assert_eq!(table(&result).height(), 10);
}

#[test]
fn area_ranking_lists_the_largest_cultivation_first() {
    let bot = assistant();
    let result = bot.answer("Show crops by cultivation area");
    assert!(result.text.contains("Top 10 Crops by Cultivation Area"));
    assert!(result.text.contains("1. **Paddy**: 1845.00 thousand hectares"));
}

#[test]
fn generic_crop_question_summarizes_the_dataset() {
    let bot = assistant();
    let result = bot.answer("Tell me about agriculture");
    assert!(result.text.contains("Crop Production Statistics"));
    assert!(result.text.contains("**Total Crops in Dataset**: 12"));
    assert_eq!(table(&result).height(), 10);
}

#[test]
fn correlation_describes_both_datasets_without_computing_a_statistic() {
    let bot = assistant();
    let result = bot.answer("what is the impact across districts?");
    assert!(result.text.contains("Agriculture & Climate Data Analysis"));
    assert!(result.text.contains("8 districts"));
    assert!(result.text.contains("12 major crops"));
    assert_eq!(result.data_type, Some(DataType::Both));
    match result.data.as_ref().unwrap() {
        AnswerData::Both { rainfall, crops } => {
            assert_eq!(rainfall.height(), 9);
            assert_eq!(crops.height(), 10);
        }
        AnswerData::Table(_) => panic!("expected both tables"),
    }
}

#[test]
fn in_domain_fallback_is_the_overview_summary() {
    let bot = assistant();
    let result = bot.answer("tell me about the districts");
    assert!(result.text.contains("AgriClimate Intelligence System"));
    assert_eq!(result.data_type, Some(DataType::Both));
}

#[test]
fn every_branch_yields_non_empty_text() {
    let bot = assistant();
    let inputs = [
        "hi",
        "how are you",
        "who made you",
        "what is your name",
        "bye",
        "qwertyzxy",
        "Which district has highest rainfall?",
        "What is the rainfall in Chennai?",
        "Compare rainfall between Chennai and Coimbatore",
        "Show rainfall for Chennai, Salem and Madurai",
        "top 3 districts by rainfall",
        "Show districts with lowest rainfall",
        "What is the average rainfall?",
        "show me rainfall please",
        "What is paddy production?",
        "Show top 5 crops by production",
        "Which crops have the highest productivity?",
        "Show crops by cultivation area",
        "Tell me about agriculture",
        "Tell me about farming here",
        "what is the impact across districts?",
        "tell me about the districts",
        "🌾🌾🌾",
    ];
    for input in inputs {
        let result = bot.answer(input);
        assert!(!result.text.is_empty(), "empty answer for {input}");
    }
}

use chrono::{Duration as ChronoDuration, Local};
use clap::Args;
use spoilage_ai::analysis::{
    validate, FoodAnalysisResult, FoodInput, SpoilageAnalysisService, SpoilageStatus,
};
use spoilage_ai::error::AppError;
use std::time::Duration;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Display name of the food item
    #[arg(long)]
    pub(crate) name: String,
    /// Whether the item was cooked (raw/harvested otherwise)
    #[arg(long)]
    pub(crate) cooked: bool,
    /// Hours since preparation or harvest
    #[arg(long)]
    pub(crate) hours: f64,
    /// Storage temperature in °C
    #[arg(long)]
    pub(crate) temp: f64,
    /// Optional quantity note shown alongside the verdict
    #[arg(long)]
    pub(crate) quantity: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Simulated per-item analysis latency in milliseconds
    #[arg(long)]
    pub(crate) delay_ms: Option<u64>,
}

pub(crate) async fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        name,
        cooked,
        hours,
        temp,
        quantity,
    } = args;

    let input = FoodInput {
        name,
        is_cooked: cooked,
        hours_since_prep: hours,
        storage_temp: temp,
        quantity,
    };
    validate(&input)?;

    let service = SpoilageAnalysisService::new();
    let result = service.analyze(&input).await;
    render_verdict(&input, &result);

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mut service = SpoilageAnalysisService::new();
    if let Some(ms) = args.delay_ms {
        service = service.with_advisory_delay(Duration::from_millis(ms));
    }

    println!("Donation intake demo");
    println!("Analyzing a day of surplus food submissions\n");

    for input in donation_batch() {
        let result = service.analyze(&input).await;
        render_verdict(&input, &result);
        println!();
    }

    Ok(())
}

fn donation_batch() -> Vec<FoodInput> {
    let items = [
        ("Vegetable Biryani", true, 3.0, 25.0, "5 boxes"),
        ("Chicken Curry", true, 4.5, 25.0, "2 trays"),
        ("Fresh Salad", false, 1.0, 20.0, "4 bowls"),
        ("Dal Makhani", true, 24.0, 4.0, "3 litres"),
        ("Frozen Chapati", true, 100.0, -5.0, "40 pieces"),
    ];

    items
        .into_iter()
        .map(|(name, is_cooked, hours, temp, quantity)| FoodInput {
            name: name.to_string(),
            is_cooked,
            hours_since_prep: hours,
            storage_temp: temp,
            quantity: Some(quantity.to_string()),
        })
        .collect()
}

fn render_verdict(input: &FoodInput, result: &FoodAnalysisResult) {
    let state = if input.is_cooked { "cooked" } else { "raw" };
    let quantity_note = match &input.quantity {
        Some(quantity) => format!(" ({quantity})"),
        None => String::new(),
    };

    println!("{}{} - {}", input.name, quantity_note, result.status.label());
    println!(
        "  {state}, {}h since prep, stored at {}°C",
        input.hours_since_prep, input.storage_temp
    );
    println!("  Risk score: {}/100", result.risk_score);
    println!("  Reason: {}", result.reason);
    println!("  Handling: {}", result.handling_instruction);

    if result.status == SpoilageStatus::Reject {
        println!("  Not listable for donation");
    } else {
        let expires_at =
            Local::now() + ChronoDuration::minutes((result.remaining_safe_hours * 60.0) as i64);
        println!(
            "  Safe for another {}h (listing expires {})",
            result.remaining_safe_hours,
            expires_at.format("%Y-%m-%d %H:%M")
        );
    }
}

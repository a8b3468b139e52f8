//! The `exambank init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create exambank.toml
    if std::path::Path::new("exambank.toml").exists() {
        println!("exambank.toml already exists, skipping.");
    } else {
        std::fs::write("exambank.toml", SAMPLE_CONFIG)?;
        println!("Created exambank.toml");
    }

    // Create example bucket
    std::fs::create_dir_all("buckets")?;
    let example_path = std::path::Path::new("buckets/example.toml");
    if example_path.exists() {
        println!("buckets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BUCKET)?;
        println!("Created buckets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add questions under buckets/");
    println!("  2. Run: exambank validate --buckets buckets");
    println!("  3. Run: exambank generate --buckets buckets");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# exambank configuration

output = "questions_data.json"
id_base = 1000
pretty = true

topics = [
    "Ethics",
    "Quantitative Methods",
    "Economics",
    "Financial Statement Analysis",
    "Corporate Issuers",
    "Equity Investments",
    "Fixed Income",
    "Derivatives",
    "Alternative Investments",
    "Portfolio Management",
]
"#;

const EXAMPLE_BUCKET: &str = r#"[bucket]
name = "example"

[[questions]]
level = "I"
topic = "Quantitative Methods"
subtopic = "Time Value of Money"
reading = "Time Value of Money Applications"
question = "A $1,000 investment earns 6% annually, compounded quarterly. What is its value after 3 years?"
options = ["$1,180.00", "$1,191.02", "$1,194.05", "$1,196.68", "$1,200.00"]
answer_index = 3
difficulty = "Medium"
type = "Calculation"
tags = ["Time Value of Money", "Compounding"]
reference = "CFA Level I, Quantitative Methods, Reading 6, 2025"

[questions.explanation]
concise = "The value is $1,196.68 with quarterly compounding."
detailed = "FV = PV x (1 + r/n)^(n x t) = $1,000 x (1.015)^12 = $1,196.68."
exam_tip = "Check compounding frequency; quarterly uses n=4."
misstep_alert = "Option 2 assumes semi-annual compounding."
practical_insight = "Higher compounding frequency increases the effective annual rate."
"#;

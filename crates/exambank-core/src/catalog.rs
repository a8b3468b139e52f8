//! Built-in sample buckets.
//!
//! One bucket per topic/level pairing shipped with the tool. Larger banks
//! are authored as TOML bucket files and loaded through [`crate::parser`].

use crate::bucket::Bucket;
use crate::model::{Explanation, QuestionDraft};

/// All built-in buckets, in emission order.
pub fn sample_buckets() -> Vec<Bucket> {
    vec![
        ethics_l1(),
        quantitative_methods_l1(),
        fixed_income_l2(),
        portfolio_management_l3(),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn ethics_l1() -> Bucket {
    Bucket::new(
        "ethics_l1",
        vec![
            QuestionDraft {
                id: Some(1001),
                level: "I".into(),
                topic: "Ethics".into(),
                subtopic: "Code and Standards".into(),
                reading: "Code of Ethics and Standards of Professional Conduct".into(),
                question: "Which action most likely violates the CFA Institute Code of Ethics?"
                    .into(),
                options: strings(&[
                    "Disclosing client data with written consent",
                    "Using material nonpublic information for trading",
                    "Maintaining client confidentiality",
                    "Providing accurate performance reports",
                    "Discussing general market trends publicly",
                ]),
                answer_index: 1,
                explanation: Explanation {
                    concise: "Using material nonpublic information violates Standard II(A)."
                        .into(),
                    detailed: "Standard II(A) prohibits trading on material nonpublic \
                               information to ensure market integrity and fair dealing. This is \
                               a fundamental ethical principle in the investment industry that \
                               protects all market participants."
                        .into(),
                    exam_tip: "Ethics questions often test clear violations like insider trading."
                        .into(),
                    misstep_alert: "Option 1 is ethical with proper consent; Option 5 is allowed \
                                    if non-confidential."
                        .into(),
                    practical_insight: "High-profile insider trading cases highlight the serious \
                                        consequences of misusing nonpublic information."
                        .into(),
                },
                difficulty: "Medium".into(),
                kind: "Core Concept".into(),
                tags: strings(&["Ethics", "Frequently Tested", "Legal Compliance"]),
                reference: "CFA Level I, Ethics, Reading 1, 2025".into(),
            },
            QuestionDraft {
                id: Some(1002),
                level: "I".into(),
                topic: "Ethics".into(),
                subtopic: "Global Investment Performance Standards".into(),
                reading: "GIPS Standards".into(),
                question: "Under GIPS standards, which requirement applies to performance \
                           presentation?"
                    .into(),
                options: strings(&[
                    "Performance must be presented net of fees only",
                    "Benchmarks are optional for all composites",
                    "At least 5 years of performance must be shown",
                    "Performance must be calculated using time-weighted returns",
                    "Only winning strategies need to be disclosed",
                ]),
                answer_index: 3,
                explanation: Explanation {
                    concise: "GIPS requires time-weighted returns for performance calculation."
                        .into(),
                    detailed: "Time-weighted returns eliminate the impact of cash flows \
                               controlled by the client, providing a fair measure of the \
                               investment manager's performance and enabling proper comparison \
                               across managers."
                        .into(),
                    exam_tip: "Remember GIPS focuses on fair representation and comparability."
                        .into(),
                    misstep_alert: "Money-weighted returns can be distorted by client cash flows."
                        .into(),
                    practical_insight: "GIPS compliance enhances credibility with institutional \
                                        investors globally."
                        .into(),
                },
                difficulty: "Hard".into(),
                kind: "Application".into(),
                tags: strings(&["GIPS", "Performance Measurement", "Standards"]),
                reference: "CFA Level I, Ethics, Reading 4, 2025".into(),
            },
        ],
    )
}

pub fn quantitative_methods_l1() -> Bucket {
    Bucket::new(
        "quantitative_methods_l1",
        vec![QuestionDraft {
            id: Some(1016),
            level: "I".into(),
            topic: "Quantitative Methods".into(),
            subtopic: "Time Value of Money".into(),
            reading: "Time Value of Money Applications".into(),
            question: "A $1,000 investment earns 6% annually, compounded quarterly. What is its \
                       value after 3 years?"
                .into(),
            options: strings(&[
                "$1,180.00",
                "$1,191.02",
                "$1,194.05",
                "$1,196.68",
                "$1,200.00",
            ]),
            answer_index: 3,
            explanation: Explanation {
                concise: "The value is $1,196.68 with quarterly compounding.".into(),
                detailed: "Formula: FV = PV × (1 + r/n)^(n×t). FV = $1,000 × (1 + 0.06/4)^(4×3) \
                           = $1,000 × (1.015)^12 = $1,196.68."
                    .into(),
                exam_tip: "Check compounding frequency; quarterly uses n=4.".into(),
                misstep_alert: "Option 2 assumes semi-annual compounding.".into(),
                practical_insight: "Higher compounding frequency increases the effective annual \
                                    rate."
                    .into(),
            },
            difficulty: "Medium".into(),
            kind: "Calculation".into(),
            tags: strings(&["Time Value of Money", "Compounding", "Quantitative"]),
            reference: "CFA Level I, Quantitative Methods, Reading 6, 2025".into(),
        }],
    )
}

pub fn fixed_income_l2() -> Bucket {
    Bucket::new(
        "fixed_income_l2",
        vec![QuestionDraft {
            id: Some(1081),
            level: "II".into(),
            topic: "Fixed Income".into(),
            subtopic: "Credit Analysis".into(),
            reading: "Yield Spreads".into(),
            question: "Which of the following best explains a widening credit spread between \
                       investment-grade and high-yield bonds?"
                .into(),
            options: strings(&[
                "Increase in benchmark interest rates",
                "Improvement in macroeconomic outlook",
                "Shift in investor risk aversion",
                "Decline in liquidity premiums",
                "Strengthening of corporate balance sheets",
            ]),
            answer_index: 2,
            explanation: Explanation {
                concise: "Widening credit spreads reflect increased investor risk aversion."
                    .into(),
                detailed: "When investors become more risk-averse, they demand higher yields for \
                           high-yield bonds relative to investment-grade bonds, widening the \
                           spread. This often occurs during economic uncertainty."
                    .into(),
                exam_tip: "Eliminate distractors by focusing on risk perception, not general \
                           rate changes."
                    .into(),
                misstep_alert: "Option 1 affects all bonds, not just spreads; Option 2 typically \
                                narrows spreads."
                    .into(),
                practical_insight: "Widening spreads signal market stress, guiding bond traders \
                                    to adjust portfolios."
                    .into(),
            },
            difficulty: "Medium".into(),
            kind: "Core Concept".into(),
            tags: strings(&["Frequently Tested", "Market Sentiment", "Credit Risk"]),
            reference: "CFA Level II, Fixed Income, Reading 31, 2025".into(),
        }],
    )
}

pub fn portfolio_management_l3() -> Bucket {
    Bucket::new(
        "portfolio_management_l3",
        vec![QuestionDraft {
            id: Some(1151),
            level: "III".into(),
            topic: "Portfolio Management".into(),
            subtopic: "Behavioral Finance".into(),
            reading: "Behavioral Biases".into(),
            question: "An investor avoids selling securities at a loss despite evidence of \
                       further decline. This behavior best illustrates:"
                .into(),
            options: strings(&[
                "Overconfidence bias",
                "Loss aversion bias",
                "Anchoring bias",
                "Regret aversion",
                "Confirmation bias",
            ]),
            answer_index: 1,
            explanation: Explanation {
                concise: "Loss aversion bias causes investors to hold losing assets.".into(),
                detailed: "Loss aversion leads investors to prioritize avoiding losses over \
                           equivalent gains, resulting in holding declining securities. This \
                           differs from regret aversion."
                    .into(),
                exam_tip: "Distinguish loss aversion (holding losses) from regret aversion \
                           (avoiding action)."
                    .into(),
                misstep_alert: "Option 3 (anchoring) involves past price fixation, not loss \
                                avoidance."
                    .into(),
                practical_insight: "Loss aversion can lead to suboptimal portfolio rebalancing."
                    .into(),
            },
            difficulty: "Easy".into(),
            kind: "Core Concept".into(),
            tags: strings(&["Behavioral Finance", "Frequently Tested"]),
            reference: "CFA Level III, Portfolio Management, Reading 8, 2025".into(),
        }],
    )
}

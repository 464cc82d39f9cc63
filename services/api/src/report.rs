use clap::Args;
use retrofit_grant::error::AppError;
use retrofit_grant::grants::{
    assess, Beneficiary, BillImporter, CatalogView, CategoryResult, GrantApplication,
    GrantAssessment, Household, WorkCategory, WorksBill,
};
use rust_decimal::Decimal;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// Monthly income per person: a band key (low, mid, high, above) or an amount
    #[arg(long)]
    pub(crate) income: String,
    /// Number of people in the household
    #[arg(long, default_value = "1")]
    pub(crate) household_size: String,
    /// Energy demand: a band key (low, mid, high, very_high) or kWh/(m²·rok)
    #[arg(long)]
    pub(crate) energy: String,
    /// The heat source is being replaced
    #[arg(long)]
    pub(crate) replace_heat: bool,
    /// A comprehensive thermal retrofit is planned
    #[arg(long)]
    pub(crate) comprehensive_retrofit: bool,
    /// Beneficiary name printed on the report
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    /// Investment address printed on the report
    #[arg(long, default_value = "")]
    pub(crate) address: String,
    /// Bill of works CSV (category,item_id,quantity,price,vat)
    #[arg(long)]
    pub(crate) bill: Option<PathBuf>,
    /// Print the assessment as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let CalculateArgs {
        income,
        household_size,
        energy,
        replace_heat,
        comprehensive_retrofit,
        name,
        address,
        bill,
        json,
    } = args;

    let works = match bill {
        Some(path) => BillImporter::from_path(path)?,
        None => WorksBill::default(),
    };

    let application = GrantApplication {
        beneficiary: Beneficiary { name, address },
        household: Household {
            energy_category: energy,
            income,
            household_size,
            replace_heat: yes_no(replace_heat),
            comprehensive_retrofit: yes_no(comprehensive_retrofit),
        },
        works,
    };

    let assessment = assess(&application);
    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!("{}", render_assessment(&assessment));
    }

    Ok(())
}

pub(crate) fn run_catalog() {
    print!("{}", render_catalog(&CatalogView::standard()));
}

fn yes_no(flag: bool) -> String {
    let answer = if flag { "yes" } else { "no" };
    answer.to_string()
}

fn money(value: Decimal) -> String {
    format!("{:.2} zł", value.round_dp(2))
}

pub(crate) fn render_catalog(catalog: &CatalogView) -> String {
    let mut out = String::new();
    for category in &catalog.categories {
        let _ = writeln!(out, "{} [{}]", category.title, category.category);
        for item in category.items {
            let _ = writeln!(
                out,
                "- {} | {} | max {} / {} | VAT {} %",
                item.id,
                item.name,
                money(item.max100),
                item.unit,
                item.vat
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Funding tiers");
    for tier in &catalog.tiers {
        let _ = writeln!(
            out,
            "- {}: factor {}, ceiling {}",
            tier.label,
            tier.factor,
            money(tier.grant_ceiling)
        );
    }
    out
}

pub(crate) fn render_assessment(assessment: &GrantAssessment) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Kalkulator programu „Czyste Powietrze”");

    match assessment {
        GrantAssessment::NotEligible {
            beneficiary,
            message,
            ..
        } => {
            write_beneficiary(&mut out, beneficiary);
            let _ = writeln!(out, "\n{message}");
        }
        GrantAssessment::Eligible {
            beneficiary,
            tier_label,
            active_categories,
            result,
            ..
        } => {
            write_beneficiary(&mut out, beneficiary);
            let _ = writeln!(out, "Poziom dofinansowania: {tier_label}");

            for category in active_categories {
                write_category(&mut out, *category, result.category(*category));
            }

            let totals = &result.totals;
            let _ = writeln!(out, "\nPodsumowanie");
            let _ = writeln!(out, "- Kwota netto inwestycji: {}", money(totals.net));
            let _ = writeln!(out, "- VAT: {}", money(totals.vat));
            let _ = writeln!(out, "- Kwota brutto inwestycji: {}", money(totals.gross));
            let _ = writeln!(out, "- Dofinansowanie: {}", money(totals.grant));
            if totals.ceiling_applied {
                let _ = writeln!(
                    out,
                    "  (limit programu; suma pozycji {})",
                    money(totals.uncapped_grant)
                );
            }
            let _ = writeln!(
                out,
                "- Kwota dopłaty beneficjenta: {}",
                money(totals.beneficiary)
            );
        }
    }

    out
}

fn write_beneficiary(out: &mut String, beneficiary: &Beneficiary) {
    let line = beneficiary.display_line();
    if !line.is_empty() {
        let _ = writeln!(out, "Beneficjent: {line}");
    }
}

fn write_category(out: &mut String, category: WorkCategory, result: &CategoryResult) {
    if result.is_empty() {
        return;
    }

    let _ = writeln!(out, "\n{}", category.title());
    for row in &result.rows {
        let _ = writeln!(
            out,
            "- {}: ilość {} {}, netto {}, VAT {}, brutto {}, dofinansowanie {}, dopłata {}",
            row.name,
            row.quantity,
            row.unit,
            money(row.cost_net),
            money(row.vat_amount),
            money(row.gross),
            money(row.grant),
            money(row.beneficiary)
        );
    }
}

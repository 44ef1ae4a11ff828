use bookgrid_core::books::{build_page_output, PageOutput};
use colored::Colorize;

use crate::api::{fetch_search_docs, SEARCH_QUERY};
use crate::prelude::{println, *};
use crate::render::{book_table, pagination_bar};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct PageOptions {
    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: PageOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching results for {SEARCH_QUERY:?}...");
    }

    let output = page_data(options.page).await;

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output);
    }

    Ok(())
}

/// Fetches the fixed query's results and builds the requested page.
///
/// An out-of-range page clamps to the last page; a failed fetch yields an
/// empty page with no pagination links.
pub async fn page_data(page: usize) -> PageOutput {
    let client = reqwest::Client::new();
    let docs = fetch_search_docs(&client).await;
    build_page_output(&docs, SEARCH_QUERY.to_string(), page)
}

/// Convert page output to JSON string
fn format_page_json(output: &PageOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert page output to formatted text with colors
fn format_page_text(output: &PageOutput) -> String {
    let mut result = String::new();
    let info = &output.pagination;

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "OPEN LIBRARY RESULTS FOR \"{}\" (Page {} of {})",
            output.query.to_uppercase(),
            info.current_page,
            info.total_pages
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.items.is_empty() {
        result.push_str(&format!("\n{}\n", "No books to show.".yellow()));
    } else {
        result.push('\n');
        result.push_str(&book_table(&output.items).to_string());
    }

    let bar = pagination_bar(info.current_page, info.total_pages);
    if !bar.is_empty() {
        result.push_str(&format!("\n{bar}\n"));
    }

    result.push_str(&format!(
        "\n{} {} {} {} ({} {})\n",
        "Showing page".bright_white(),
        info.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        info.total_pages.to_string().bright_cyan().bold(),
        info.total_items.to_string().bright_cyan().bold(),
        "total results".bright_white()
    ));

    result.push_str(&format!("\n{}:\n", "To navigate".bright_white().bold()));
    if let Some(next) = &info.next_page_command {
        result.push_str(&format!("  {}: {}\n", "Next page".green(), next.cyan()));
    }
    if let Some(prev) = &info.prev_page_command {
        result.push_str(&format!("  {}: {}\n", "Previous page".green(), prev.cyan()));
    }
    result.push_str(&format!(
        "  {}: {}\n",
        "JSON output".green(),
        "bookgrid page --json".cyan()
    ));
    result.push_str(&format!(
        "  {}: {}\n",
        "Interactive".green(),
        "bookgrid browse".cyan()
    ));

    result.push('\n');
    result
}

fn output_json(output: &PageOutput) -> Result<()> {
    let json = format_page_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &PageOutput) {
    let formatted = format_page_text(output);
    print!("{}", formatted);
}

//! Browse a bundled consultant roster from the command line.
//!
//! Each flag maps onto one of the renderer intents a table view would send:
//! `--query` is the search box, `--status`/`--verified` are selects,
//! `--joined-from`/`--joined-to` the date-range inputs, `--page` and
//! `--per-page` the pagination controls. `--role` prints the navigation a
//! given role would see.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;

use tabula_engine::{FilterOption, FilterSpec, ListConfig, ListState};
use tabula_session::{visible_items_for, Catalog, NavItem, Role};

const ROSTER: &str = include_str!("../roster.json");

#[derive(Parser)]
#[command(name = "roster", about = "Browse the consultant roster")]
struct Cli {
    /// Free-text search over name, company, and skills
    #[arg(short, long, default_value = "")]
    query: String,

    /// Filter by placement status (placed, bench, offer; default all)
    #[arg(long, default_value = "all")]
    status: String,

    /// Filter by verification state
    #[arg(long)]
    verified: Option<bool>,

    /// Only consultants who joined on or after this date (YYYY-MM-DD)
    #[arg(long)]
    joined_from: Option<String>,

    /// Only consultants who joined on or before this date (YYYY-MM-DD)
    #[arg(long)]
    joined_to: Option<String>,

    /// Page to show
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Rows per page (5, 10, or 25)
    #[arg(long, default_value_t = 5)]
    per_page: usize,

    /// Print the navigation menu for a role instead of the roster
    #[arg(long)]
    role: Option<String>,
}

fn list_config() -> ListConfig {
    ListConfig::new()
        .search_field("name")
        .search_field("companyName")
        .search_field("skills")
        .filter(FilterSpec::exact_match(
            "status",
            [
                FilterOption::new("placed", "Placed"),
                FilterOption::new("bench", "On bench"),
                FilterOption::new("offer", "Offer out"),
            ],
        ))
        .filter(FilterSpec::exact_match(
            "verified",
            [
                FilterOption::new("true", "Verified"),
                FilterOption::new("false", "Not verified"),
            ],
        ))
        .filter(FilterSpec::date_range("joinedAt"))
        .per_page_options([5, 10, 25])
}

fn nav_catalog() -> Catalog {
    Catalog::new(vec![
        NavItem::leaf("dashboard", "Dashboard", "/"),
        NavItem::leaf("consultants", "Consultants", "/consultants").for_roles(["admin", "manager"]),
        NavItem::leaf("agreements", "Agreements", "/agreements").for_roles(["admin"]),
        NavItem::leaf("profile", "My profile", "/me"),
    ])
}

fn print_menu(role_name: &str) {
    let role = Role::new(role_name);
    let menu = visible_items_for(&role, &nav_catalog());
    println!("menu for '{role}':");
    for item in &menu.items {
        println!("  {:<14} {}", item.label, item.route.as_deref().unwrap_or(""));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(role) = &cli.role {
        print_menu(role);
        return Ok(());
    }

    let records: Vec<Value> = serde_json::from_str(ROSTER).context("bundled roster is invalid")?;

    let mut list = ListState::new(list_config())?;
    list.set_items_per_page(cli.per_page)?;
    list.set_query(cli.query.as_str());
    list.set_filter("status", cli.status.as_str())?;
    if let Some(verified) = cli.verified {
        // Select inputs emit strings; the boolean coercion happens here,
        // on the caller side, before the engine sees the value.
        list.set_filter("verified", verified)?;
    }
    list.set_range(
        "joinedAt",
        cli.joined_from.as_deref(),
        cli.joined_to.as_deref(),
    )?;
    list.set_page(cli.page);

    let view = list.view(&records);
    println!(
        "{:<18} {:<12} {:<16} {:<8} {:<10}",
        "name", "company", "skills", "status", "joined"
    );
    for record in &view.page_items {
        println!(
            "{:<18} {:<12} {:<16} {:<8} {:<10}",
            record["name"].as_str().unwrap_or("-"),
            record["companyName"].as_str().unwrap_or("-"),
            record["skills"].as_str().unwrap_or("-"),
            record["status"].as_str().unwrap_or("-"),
            record["joinedAt"].as_str().unwrap_or("-"),
        );
    }

    let pager: Vec<String> = view.page_numbers.iter().map(ToString::to_string).collect();
    println!(
        "\n{} of {} consultants | page {} of {} | {}",
        view.page_items.len(),
        view.total_items,
        view.current_page,
        view.total_pages.max(1),
        pager.join(" ")
    );
    Ok(())
}

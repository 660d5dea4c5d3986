use crate::api::RosterBackend;
use crate::roster::champion::Champion;
use crate::roster::ranking::{is_unranked, rank, Weight};
use crate::roster::sort::{SortDirection, SortKey, SortState};
use crate::roster::view::RosterView;
use colored::*;
use tabled::settings::{object::Cell, Format, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ChampionRow {
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Champion")]
    name: String,
    #[tabled(rename = "Winrate")]
    win_rate: String,
    #[tabled(rename = "Mastery")]
    mastery: String,
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Won")]
    won: String,
    #[tabled(rename = "Played")]
    played: String,
}

impl ChampionRow {
    fn new(champ: &Champion, weight: Weight, highlighted: bool) -> Self {
        let name = if highlighted {
            format!("▶ {}", champ.name).bold().yellow().to_string()
        } else {
            champ.name.clone()
        };

        let icon = if champ.icon.is_empty() {
            "·".to_string()
        } else {
            champ.icon.clone()
        };

        ChampionRow {
            icon,
            id: champ.id.to_string(),
            name,
            win_rate: format_percent(champ.win_rate),
            mastery: format_integer(champ.mastery),
            metric: format_metric(rank(champ, weight)),
            won: format_flag(champ.won),
            played: format_flag(champ.played),
        }
    }
}

// header position of each sortable column
fn column_index(key: SortKey) -> usize {
    match key {
        SortKey::Name => 2,
        SortKey::WinRate => 3,
        SortKey::Mastery => 4,
        SortKey::Metric => 5,
        SortKey::Won => 6,
        SortKey::Played => 7,
    }
}

fn direction_arrow(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

/// Rounded table with the active sort column's header marked by an arrow.
fn roster_table(rows: Vec<ChampionRow>, sort: SortState) -> Table {
    let arrow = direction_arrow(sort.direction);
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(
            Modify::new(Cell::new(0, column_index(sort.key)))
                .with(Format::content(|header| format!("{} {}", header, arrow))),
        );
    table
}

pub fn format_percent(win_rate: f64) -> String {
    format!("{:.2}%", win_rate)
}

/// Integer with thousands separators, e.g. `1,234,567`.
pub fn format_integer(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_metric(score: f64) -> String {
    if is_unranked(score) {
        "—".to_string()
    } else {
        format!("{:.2}", score)
    }
}

fn format_flag(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "·".dimmed().to_string()
    }
}

pub fn display_roster<B: RosterBackend>(view: &RosterView<B>) {
    let weight = view.weight();
    let last_picked = view.last_picked();

    let rows: Vec<ChampionRow> = view
        .visible()
        .map(|champ| ChampionRow::new(champ, weight, Some(champ.id) == last_picked))
        .collect();
    let shown = rows.len();

    println!("\n{}", "🏆 Champion Roster".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if rows.is_empty() {
        println!("{}", "No champions match the current filters".yellow());
    } else {
        println!("{}", roster_table(rows, view.sort_state()));
    }

    display_status(view, shown);
}

fn display_status<B: RosterBackend>(view: &RosterView<B>, shown: usize) {
    let sort = view.sort_state();
    let arrow = direction_arrow(sort.direction);
    let filter = view.filter_state();
    let filters = if filter.is_searching() {
        format!("search {:?}", filter.search)
    } else {
        format!("played: {} · won: {}", filter.played, filter.won)
    };
    let fetched = view
        .fetched_at()
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "never".to_string());

    println!(
        "{} weight {} · sort {} {} · {} · {}/{} shown · fetched {}\n",
        "📊".cyan(),
        view.weight().to_string().bold(),
        sort.key,
        arrow,
        filters,
        shown,
        view.champions().len(),
        fetched
    );
}

pub fn display_pick(champ: &Champion) {
    println!(
        "{} Picked {} (#{})",
        "🎲".cyan(),
        champ.name.bold().green(),
        champ.id
    );
    if !champ.icon.is_empty() {
        println!("   {}", champ.icon.dimmed());
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::ranking::UNRANKED_SCORE;

    #[test]
    fn integers_are_grouped() {
        assert_eq!(format_integer(0), "0");
        assert_eq!(format_integer(999), "999");
        assert_eq!(format_integer(1000), "1,000");
        assert_eq!(format_integer(1234567), "1,234,567");
        assert_eq!(format_integer(-45000), "-45,000");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(51.2), "51.20%");
        assert_eq!(format_percent(100.0), "100.00%");
    }

    fn header_line(sort: SortState) -> String {
        let ahri = Champion {
            icon: "https://cdn.example/ahri.png".to_string(),
            ..Champion::new(103, "Ahri", 55.0, 1024)
        };
        let table = roster_table(vec![ChampionRow::new(&ahri, Weight::default(), false)], sort);
        table.to_string().lines().nth(1).unwrap_or_default().to_string()
    }

    #[test]
    fn table_header_has_icon_column() {
        let header = header_line(SortState::default());
        let icon = header.find("Icon").expect("Icon header");
        let champion = header.find("Champion").expect("Champion header");
        assert!(icon < champion);
        assert!(header.contains("ID"));
    }

    #[test]
    fn arrow_marks_active_sort_column() {
        let header = header_line(SortState::default());
        assert!(header.contains("Metric ▼"));
        assert_eq!(header.matches('▼').count(), 1);
        assert!(!header.contains('▲'));

        let by_name = SortState {
            key: SortKey::Name,
            direction: SortDirection::Ascending,
        };
        let header = header_line(by_name);
        assert!(header.contains("Champion ▲"));
        assert!(!header.contains("Metric ▲"));
        assert!(!header.contains('▼'));
    }

    #[test]
    fn icon_cell_shows_reference() {
        let lux = Champion {
            icon: "lux.png".to_string(),
            ..Champion::new(99, "Lux", 51.0, 64)
        };
        let row = ChampionRow::new(&lux, Weight::default(), false);
        assert_eq!(row.icon, "lux.png");

        let bare = ChampionRow::new(&Champion::new(1, "Zed", 45.0, 4), Weight::default(), false);
        assert_eq!(bare.icon, "·");
    }

    #[test]
    fn unranked_metric_is_dashed() {
        assert_eq!(format_metric(UNRANKED_SCORE), "—");
        assert_eq!(format_metric(300.0), "300.00");
        assert_eq!(format_metric(-12.5), "-12.50");
    }
}

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use passrank::scorer::ComputedResult;
use passrank::search::PlayerSummary;

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.iter().map(|h| Cell::new(h).add_attribute(Attribute::Bold)));
    table
}

fn right_align(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn pct(acc: f64) -> String {
    format!("{:.2}%", acc * 100.0)
}

fn flags(r: &ComputedResult) -> String {
    let mut out = Vec::new();
    if r.is_worlds_first {
        out.push("WF");
    }
    if r.is_12k {
        out.push("12K");
    }
    if r.is_no_hold {
        out.push("NHT");
    }
    out.join(" ")
}

fn date(r: &ComputedResult) -> String {
    if r.date_is_fallback {
        "-".to_string()
    } else {
        r.date.format("%Y-%m-%d").to_string()
    }
}

pub fn leaderboard(title: &str, results: &[ComputedResult]) {
    let mut table = new_table(&["#", "Player", "Score", "Xacc", "Speed", "Date", "Flags"]);
    for (i, r) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.player).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", r.score)).fg(Color::Cyan),
            Cell::new(pct(r.accuracy)),
            Cell::new(format!("{:.2}x", r.speed)),
            Cell::new(date(r)),
            Cell::new(flags(r)).fg(Color::Yellow),
        ]);
    }
    right_align(&mut table, 2..=4);
    println!("\n{}\n{}", title, table);
}

pub fn player(summary: &PlayerSummary) {
    let mut table = new_table(&[
        "Player", "Country", "Ranked", "General", "Xacc", "Clears", "U", "WF", "Top", "Top 12K",
    ]);
    table.add_row(vec![
        Cell::new(&summary.player).add_attribute(Attribute::Bold),
        Cell::new(&summary.country),
        Cell::new(format!("{:.2}", summary.ranked_score)).fg(Color::Cyan),
        Cell::new(format!("{:.2}", summary.general_score)),
        Cell::new(pct(summary.avg_accuracy)),
        Cell::new(summary.total_passes),
        Cell::new(summary.universal_passes),
        Cell::new(summary.wf_passes).fg(Color::Yellow),
        Cell::new(summary.top_diff),
        Cell::new(summary.top_12k_diff),
    ]);
    println!("\n{}", table);

    if let Some(clears) = &summary.clears {
        self::clears(clears, None);
    }
}

pub fn players(board: &[PlayerSummary], limit: Option<usize>) {
    let mut table = new_table(&[
        "#", "Player", "Country", "Ranked", "General", "Xacc", "Clears", "U", "WF", "Top",
    ]);
    for (i, s) in board.iter().take(limit.unwrap_or(usize::MAX)).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&s.player).add_attribute(Attribute::Bold),
            Cell::new(&s.country),
            Cell::new(format!("{:.2}", s.ranked_score)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", s.general_score)),
            Cell::new(pct(s.avg_accuracy)),
            Cell::new(s.total_passes),
            Cell::new(s.universal_passes),
            Cell::new(s.wf_passes).fg(Color::Yellow),
            Cell::new(s.top_diff),
        ]);
    }
    right_align(&mut table, 3..=8);
    println!("\n{}", table);
}

pub fn clears(clears: &[ComputedResult], limit: Option<usize>) {
    let mut table = new_table(&[
        "#", "Player", "Song", "Diff", "Score", "Xacc", "Speed", "Date", "Flags",
    ]);
    for (i, r) in clears.iter().take(limit.unwrap_or(usize::MAX)).enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.player).add_attribute(Attribute::Bold),
            Cell::new(format!("{} - {}", r.artist, r.song)),
            Cell::new(&r.pgu_diff),
            Cell::new(format!("{:.2}", r.score)).fg(Color::Cyan),
            Cell::new(pct(r.accuracy)),
            Cell::new(format!("{:.2}x", r.speed)),
            Cell::new(date(r)),
            Cell::new(flags(r)).fg(Color::Yellow),
        ]);
    }
    right_align(&mut table, 4..=6);
    println!("\n{}", table);
}

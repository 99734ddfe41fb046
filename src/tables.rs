use chrono::NaiveDateTime;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use srpenergy::{
    tariff::{Holiday, Season, is_weekend, resolve},
    usage::{Usage, UsageSummary},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

const fn peak_color(is_peak: bool) -> Color {
    if is_peak { Color::Red } else { Color::Green }
}

pub fn build_usage_table(usage: &[Usage]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Time", "Energy", "Rate", "Cost"]);
    for hour in usage {
        let rate_cell = match hour.rate {
            Some(rate) => Cell::new(rate.value).fg(peak_color(rate.is_peak)),
            None => Cell::new("flat").add_attribute(Attribute::Dim),
        };
        table.add_row(vec![
            Cell::new(hour.pretty_date()).add_attribute(Attribute::Dim),
            Cell::new(hour.pretty_time()),
            Cell::new(hour.energy).set_alignment(CellAlignment::Right),
            rate_cell.set_alignment(CellAlignment::Right),
            Cell::new(hour.cost).set_alignment(CellAlignment::Right),
        ]);
    }
    let summary = usage.iter().collect::<UsageSummary>();
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(summary.energy).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(summary.cost).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn build_rate_table(hours: &[NaiveDateTime]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Season", "Day", "Rate", "Peak"]);
    for at in hours {
        let date = at.date();
        let rate = resolve(*at);
        let day = match Holiday::of(date) {
            Some(holiday) => Cell::new(holiday).fg(Color::DarkYellow),
            None if is_weekend(date) => Cell::new("weekend").fg(Color::DarkYellow),
            None => Cell::new(date.format("%A")).add_attribute(Attribute::Dim),
        };
        table.add_row(vec![
            Cell::new(at.format("%Y-%m-%d %H:%M")),
            Cell::new(Season::of(date)),
            day,
            Cell::new(rate.value).set_alignment(CellAlignment::Right).fg(peak_color(rate.is_peak)),
            Cell::new(if rate.is_peak { "yes" } else { "no" }).fg(peak_color(rate.is_peak)),
        ]);
    }
    table
}

//! Plain-text rendering of a [`ListPresentation`].

use colored::Colorize;
use ivy_core::{CalendarZone, ListPresentation, ListRow};
use ivy_domain::{Amounted, Displayable};

const LABEL_WIDTH: usize = 24;
const AMOUNT_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStyle {
    pub color: bool,
    /// Zone used to print due dates.
    pub calendar: CalendarZone,
}

impl RenderStyle {
    pub fn plain(calendar: CalendarZone) -> Self {
        Self {
            color: false,
            calendar,
        }
    }
}

/// Renders one line per row; the empty state takes two.
pub fn render(presentation: &ListPresentation, style: &RenderStyle) -> String {
    let mut out = String::new();
    for row in &presentation.rows {
        out.push_str(&render_row(row, style));
        out.push('\n');
    }
    out
}

fn render_row(row: &ListRow, style: &RenderStyle) -> String {
    match row {
        ListRow::DueHeader {
            kind,
            count,
            income,
            expense,
            expanded,
        } => {
            let marker = if *expanded { "[-]" } else { "[+]" };
            let title = format!("{marker} {kind} ({count})");
            format!(
                "{}  income {:.2}  expense {:.2}",
                heading(title, style),
                income,
                expense
            )
        }
        ListRow::Due(txn) => {
            let due = txn
                .due_date
                .map(|due| style.calendar.date_of(due).format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".repeat(10));
            format!(
                "    {due}  {:<width$} {}",
                txn.display_label(),
                signed(txn.signed_amount(), style),
                width = LABEL_WIDTH
            )
        }
        ListRow::DateDivider { date, cashflow } => format!(
            "{}  {}",
            heading(date.format("%a, %d %b %Y").to_string(), style),
            signed(*cashflow, style)
        ),
        ListRow::Transaction(txn) => format!(
            "    {:<width$} {}",
            txn.display_label(),
            signed(txn.signed_amount(), style),
            width = LABEL_WIDTH
        ),
        ListRow::Transfer(transfer) => format!(
            "    {:<width$} {:>amount$.2}",
            transfer.display_label(),
            transfer.amount(),
            width = LABEL_WIDTH,
            amount = AMOUNT_WIDTH
        ),
        ListRow::Empty(empty) => {
            format!("{}\n{}", heading(empty.title.clone(), style), empty.description)
        }
    }
}

fn heading(text: String, style: &RenderStyle) -> String {
    if style.color {
        text.bold().to_string()
    } else {
        text
    }
}

fn signed(value: f64, style: &RenderStyle) -> String {
    let text = format!("{value:>+width$.2}", width = AMOUNT_WIDTH);
    if !style.color {
        text
    } else if value < 0.0 {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}

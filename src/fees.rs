//! Fee-collection arithmetic.
//!
//! A student's fee structure is a list of billable line items. The dashboard
//! shows two running totals: everything still owed, and the amount covered by
//! the line items the operator has ticked for batch collection.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeStatus {
    Paid,
    Pending,
    Partial,
}

impl FeeStatus {
    pub fn parse(s: &str) -> Option<FeeStatus> {
        match s {
            "paid" => Some(FeeStatus::Paid),
            "pending" => Some(FeeStatus::Pending),
            "partial" => Some(FeeStatus::Partial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeeStatus::Paid => "paid",
            FeeStatus::Pending => "pending",
            FeeStatus::Partial => "partial",
        }
    }
}

/// One billable category (tuition, transport, ...) for a student.
///
/// Amounts are whole rupees. `paid_amount` is present iff the item has seen
/// any payment (`status != pending`); `paid` implies `paid_amount == amount`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeLineItem {
    pub category: String,
    pub amount: i64,
    pub status: FeeStatus,
    pub due_date: String,
    pub paid_amount: Option<i64>,
}

impl FeeLineItem {
    /// What remains unpaid on this line item.
    pub fn outstanding(&self) -> i64 {
        self.amount - self.paid_amount.unwrap_or(0)
    }

    /// Fully paid items cannot be ticked for collection.
    pub fn selectable(&self) -> bool {
        self.status != FeeStatus::Paid
    }
}

/// Total still owed across the structure: non-paid items only.
pub fn total_due(items: &[FeeLineItem]) -> i64 {
    items
        .iter()
        .filter(|it| it.status != FeeStatus::Paid)
        .map(FeeLineItem::outstanding)
        .sum()
}

/// Outstanding total across the ticked categories.
///
/// No status filter here: a paid item in the selection contributes zero
/// (its `paid_amount` equals its `amount`), and the selection surface never
/// offers paid items anyway.
pub fn total_selected(items: &[FeeLineItem], selected_categories: &[String]) -> i64 {
    items
        .iter()
        .filter(|it| selected_categories.iter().any(|c| c == &it.category))
        .map(FeeLineItem::outstanding)
        .sum()
}

//! Summary command - Print the dashboard figures

use crate::aggregate::{DashboardSummary, StatusCount};
use crate::errors::Result;

use super::{print_json, Workspace};

fn print_counts(title: &str, counts: &[StatusCount]) {
    println!("{}:", title);
    for c in counts {
        println!("  {:<18} {:>5}", c.status, c.count);
    }
}

fn print_amounts<'a>(title: &str, amounts: impl IntoIterator<Item = (&'a String, &'a f64)>) {
    println!("{}:", title);
    for (key, amount) in amounts {
        println!("  {:<24} {:>14.2}", key, amount);
    }
}

pub async fn run(ws: &Workspace, json: bool) -> Result<()> {
    let store = ws.load_store().await?;
    let summary = DashboardSummary::from_store(&store);

    if json {
        return print_json(&summary);
    }

    print_counts("Bookings", &summary.bookings_by_status);
    print_counts("Trips", &summary.trips_by_status);
    print_counts("Fish orders", &summary.fish_orders_by_status);
    print_amounts("Revenue by farm", &summary.revenue_by_farm);
    print_amounts("Trip revenue by month", &summary.trip_revenue_by_month);
    println!("Total revenue: {:.2}", summary.total_revenue);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::workspace;
    use super::*;
    use crate::fs::FISH_ORDERS_FILE;

    #[tokio::test]
    async fn test_summary_runs_on_snapshot() {
        let (_temp, ws) = workspace(&[(
            FISH_ORDERS_FILE,
            r#"[{"id": 1, "bookingId": 1, "status": "Completed", "total": 300.0}]"#,
        )]);
        run(&ws, false).await.unwrap();
        run(&ws, true).await.unwrap();

        let store = ws.load_store().await.unwrap();
        let summary = DashboardSummary::from_store(&store);
        assert_eq!(summary.total_revenue, 300.0);
        let completed = summary
            .fish_orders_by_status
            .iter()
            .find(|c| c.status == "Completed")
            .unwrap();
        assert_eq!(completed.count, 1);
    }
}

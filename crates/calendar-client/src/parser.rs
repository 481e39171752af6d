//! CSS-selector extraction of calendar rows.

use scraper::{ElementRef, Html, Selector};

use crate::types::RawCalendarRow;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn cell_text(row: ElementRef<'_>, sel: &Selector) -> String {
    row.select(sel)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
}

/// Extract every calendar row from the page markup. Pure and infallible:
/// rows that do not match the expected cell layout simply come out with
/// empty fields and are rejected downstream.
pub fn extract_rows(html: &str) -> Vec<RawCalendarRow> {
    let document = Html::parse_document(html);

    let row_sel = selector(".calendar__row");
    let title_sel = selector(".calendar__event-title");
    let time_sel = selector(".calendar__time");
    let impact_cell_sel = selector(".calendar__impact");
    let impact_span_sel = selector(".calendar__impact span");
    let description_sel = selector(".calendar__event");
    let currency_sel = selector(".calendar__cell.calendar__currency span");
    let actual_sel = selector(".calendar__cell.calendar__actual");
    let forecast_sel = selector(".calendar__cell.calendar__forecast");
    let previous_sel = selector(".calendar__cell.calendar__previous");

    let mut rows = Vec::new();

    for row in document.select(&row_sel) {
        // The indicator text lives in the impact span's title attribute;
        // a present-but-unlabeled cell still counts as present.
        let impact_indicator = row.select(&impact_cell_sel).next().map(|_| {
            row.select(&impact_span_sel)
                .next()
                .and_then(|span| span.value().attr("title"))
                .unwrap_or_default()
                .to_string()
        });

        rows.push(RawCalendarRow {
            title: cell_text(row, &title_sel),
            time: cell_text(row, &time_sel),
            currency: cell_text(row, &currency_sel),
            description: cell_text(row, &description_sel),
            actual: cell_text(row, &actual_sel),
            forecast: cell_text(row, &forecast_sel),
            previous: cell_text(row, &previous_sel),
            impact_indicator,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
    <table>
      <tr class="calendar__row">
        <td class="calendar__cell calendar__time"><span>8:30am</span></td>
        <td class="calendar__cell calendar__currency"><span>USD</span></td>
        <td class="calendar__cell calendar__impact">
          <span title="High Impact Expected"></span>
        </td>
        <td class="calendar__cell calendar__event">
          <span class="calendar__event-title">Core CPI m/m</span>
        </td>
        <td class="calendar__cell calendar__actual">0.4%</td>
        <td class="calendar__cell calendar__forecast">0.3%</td>
        <td class="calendar__cell calendar__previous">0.2%</td>
      </tr>
      <tr class="calendar__row">
        <td class="calendar__cell calendar__time"></td>
        <td class="calendar__cell calendar__currency"><span>GBP</span></td>
        <td class="calendar__cell calendar__impact">
          <span title="Low Impact Expected"></span>
        </td>
        <td class="calendar__cell calendar__event">
          <span class="calendar__event-title">BOE Gov Speaks</span>
        </td>
        <td class="calendar__cell calendar__actual"></td>
        <td class="calendar__cell calendar__forecast"></td>
        <td class="calendar__cell calendar__previous"></td>
      </tr>
      <tr class="calendar__row">
        <td class="calendar__cell calendar__event">
          <span class="calendar__event-title">No events</span>
        </td>
      </tr>
    </table>
    "#;

    #[test]
    fn test_extract_rows_reads_all_cells() {
        let rows = extract_rows(FIXTURE);
        assert_eq!(rows.len(), 3);

        let cpi = &rows[0];
        assert_eq!(cpi.title, "Core CPI m/m");
        assert_eq!(cpi.time, "8:30am");
        assert_eq!(cpi.currency, "USD");
        assert_eq!(cpi.actual, "0.4%");
        assert_eq!(cpi.forecast, "0.3%");
        assert_eq!(cpi.previous, "0.2%");
        assert_eq!(
            cpi.impact_indicator.as_deref(),
            Some("High Impact Expected")
        );
    }

    #[test]
    fn test_extract_rows_missing_impact_cell_is_none() {
        let rows = extract_rows(FIXTURE);
        let banner = &rows[2];
        assert_eq!(banner.title, "No events");
        assert_eq!(banner.impact_indicator, None);
        assert_eq!(banner.currency, "");
    }

    #[test]
    fn test_extract_rows_empty_document() {
        assert!(extract_rows("<html><body></body></html>").is_empty());
    }
}

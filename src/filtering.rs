use crate::query::Query;
use crate::types::dataset::Dataset;
use crate::types::row::Row;

/// Returns true if `row` satisfies every field set on `query`.
///
/// `check_year` must be set when the rows come from the combined table. Rows of
/// a per-year table are assumed to belong to that year and are not re-checked.
pub fn row_matches(row: &Row, query: &Query, check_year: bool) -> bool {
    if query.lat.is_some_and(|lat| row.lat_round != lat) {
        return false;
    }
    if query.lon.is_some_and(|lon| row.lon_round != lon) {
        return false;
    }

    let parts = row.date_parts();
    if check_year && parts.year != query.year.get() {
        return false;
    }
    if query.month.is_some_and(|month| parts.month != month) {
        return false;
    }
    if query.day.is_some_and(|day| parts.day != day) {
        return false;
    }
    true
}

pub trait RowFilterExt {
    /// Selects the rows matching `query`, keeping their original order.
    ///
    /// # Arguments
    /// * `query`: The fields to match. Unset fields match anything.
    /// * `check_year`: Compare the year packed into `YYYYMMDD` with `query.year`.
    ///
    /// # Returns
    /// The matching rows, possibly none.
    fn filter_rows(&self, query: &Query, check_year: bool) -> Vec<&Row>;
}

impl RowFilterExt for [Row] {
    fn filter_rows(&self, query: &Query, check_year: bool) -> Vec<&Row> {
        self.iter()
            .filter(|row| row_matches(row, query, check_year))
            .collect()
    }
}

impl Dataset {
    /// Rows of this dataset matching `query`, in table order.
    ///
    /// The year is only compared for the combined table.
    pub fn search(&self, query: &Query) -> Vec<&Row> {
        self.rows().filter_rows(query, self.key().is_combined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::partition::PartitionKey;
    use crate::types::year::Year;

    fn row(file: &str, yyyymmdd: i32, lat_round: i32, lon_round: i32) -> Row {
        Row {
            file: file.to_string(),
            yyyymmdd,
            lat_round,
            lon_round,
        }
    }

    fn target() -> Row {
        row("coriolis/6901/profiles/R6901_015.nc", 20240315, 10, -20)
    }

    fn exact() -> Query {
        Query::new(Year(2024)).month(3).day(15).lat(10).lon(-20)
    }

    #[test]
    fn test_exact_match() {
        let rows = vec![target()];
        assert_eq!(rows.filter_rows(&exact(), true), vec![&rows[0]]);
    }

    #[test]
    fn test_any_single_mismatch_excludes() {
        let rows = vec![target()];
        let variants = [
            Query { year: Year(2023), ..exact() },
            Query { month: Some(4), ..exact() },
            Query { day: Some(16), ..exact() },
            Query { lat: Some(11), ..exact() },
            Query { lon: Some(-21), ..exact() },
        ];
        for query in variants {
            assert!(
                rows.filter_rows(&query, true).is_empty(),
                "query {:?} should not match",
                query
            );
        }
    }

    #[test]
    fn test_unset_month_and_day_match_whole_year() {
        let rows = vec![
            row("a.nc", 20240101, 0, 0),
            row("b.nc", 20240615, 5, 5),
            row("c.nc", 20241231, -3, 200),
            row("d.nc", 20230101, 0, 0),
        ];
        let hits = rows.filter_rows(&Query::new(Year(2024)), true);
        let files: Vec<&str> = hits.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(files, vec!["a.nc", "b.nc", "c.nc"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let rows = vec![target()];
        let query = Query::new(Year(2024)).lat(-60);
        assert!(rows.filter_rows(&query, false).is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let rows = vec![
            row("z.nc", 20240301, 1, 1),
            row("skip.nc", 20240401, 1, 1),
            row("a.nc", 20240302, 1, 1),
            row("m.nc", 20240331, 1, 1),
        ];
        let query = Query::new(Year(2024)).month(3);
        let files: Vec<&str> = rows
            .filter_rows(&query, false)
            .iter()
            .map(|r| r.file.as_str())
            .collect();
        assert_eq!(files, vec!["z.nc", "a.nc", "m.nc"]);
    }

    #[test]
    fn test_partitioned_dataset_skips_year_check() {
        // A mislabelled row inside the 2024 file is still returned.
        let dataset = Dataset::new(
            PartitionKey::Year(Year(2024)),
            vec![row("old.nc", 19990315, 10, -20)],
        );
        let query = Query::new(Year(2024)).month(3).day(15);
        assert_eq!(dataset.search(&query).len(), 1);
    }

    #[test]
    fn test_combined_dataset_checks_year() {
        let dataset = Dataset::new(
            PartitionKey::Combined,
            vec![
                row("old.nc", 19990315, 10, -20),
                row("new.nc", 20240315, 10, -20),
            ],
        );
        let hits = dataset.search(&Query::new(Year(2024)).month(3));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].file, "new.nc");
    }
}

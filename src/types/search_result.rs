use crate::query::Query;
use crate::types::partition::PartitionKey;
use crate::types::row::Row;
use std::fmt;

/// The rows a [`Query`] matched, in table order, plus where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub query: Query,
    pub partition: PartitionKey,
    pub hits: Vec<Row>,
}

impl SearchResult {
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Download links of all hits, in order.
    pub fn links(&self) -> impl Iterator<Item = String> + '_ {
        self.hits.iter().map(Row::url)
    }

    /// Short human readable count, e.g. `"1 file found"` or `"12 files found"`.
    pub fn summary(&self) -> String {
        let n = self.hits.len();
        format!("{} file{} found", n, if n == 1 { "" } else { "s" })
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        for link in self.links() {
            writeln!(f, "{}", link)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::year::Year;

    fn row(file: &str) -> Row {
        Row {
            file: file.to_string(),
            yyyymmdd: 20240315,
            lat_round: 10,
            lon_round: 340,
        }
    }

    fn result(hits: Vec<Row>) -> SearchResult {
        SearchResult {
            query: Query::new(Year(2024)),
            partition: PartitionKey::Year(Year(2024)),
            hits,
        }
    }

    #[test]
    fn test_summary_pluralization() {
        assert_eq!(result(vec![]).summary(), "0 files found");
        assert_eq!(result(vec![row("a.nc")]).summary(), "1 file found");
        assert_eq!(
            result(vec![row("a.nc"), row("b.nc")]).summary(),
            "2 files found"
        );
    }

    #[test]
    fn test_display_lists_links_in_order() {
        let res = result(vec![row("aoml/1/b.nc"), row("aoml/1/a.nc")]);
        let text = res.to_string();
        assert_eq!(
            text,
            "2 files found\n\
             https://data-argo.ifremer.fr/dac/aoml/1/b.nc\n\
             https://data-argo.ifremer.fr/dac/aoml/1/a.nc\n"
        );
    }
}

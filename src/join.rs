use tracing::info;

use crate::{error::ScoreError, types::{AttributeTable, BoundarySet, Region}};

/// Match boundary outlines to attribute rows by region name.
///
/// The match must be exact in both directions: a name present on only one side
/// fails with `JoinMismatch` naming every unmatched region, so one empty side
/// reports every row of the other. Output follows the boundary file order.
pub fn join(boundaries: &BoundarySet, table: &AttributeTable) -> Result<Vec<Region>, ScoreError> {
    if boundaries.is_empty() && table.is_empty() { return Err(ScoreError::EmptyInput) }

    let missing_in_table = boundaries.names()
        .filter(|name| table.get(name).is_none())
        .map(str::to_owned)
        .collect::<Vec<_>>();
    let missing_in_boundaries = table.names()
        .filter(|name| boundaries.get(name).is_none())
        .map(str::to_owned)
        .collect::<Vec<_>>();

    if !missing_in_table.is_empty() || !missing_in_boundaries.is_empty() {
        return Err(ScoreError::join_mismatch(missing_in_table, missing_in_boundaries));
    }

    let regions = boundaries.names()
        .filter_map(|name| table.get(name).cloned())
        .collect::<Vec<_>>();

    info!(regions = regions.len(), "joined boundaries with attribute table");
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data, types::Boundary};
    use geo::MultiPolygon;

    fn boundaries(names: &[&str]) -> BoundarySet {
        BoundarySet::new(names.iter().map(|n| Boundary::new(*n, MultiPolygon(vec![]))).collect()).unwrap()
    }

    #[test]
    fn join_follows_boundary_order() {
        let set = boundaries(&["Staten Island", "Queens", "Manhattan", "Brooklyn", "Bronx"]);
        let regions = join(&set, &data::nyc_attributes()).unwrap();
        let names = regions.iter().map(|r| r.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Staten Island", "Queens", "Manhattan", "Brooklyn", "Bronx"]);
    }

    #[test]
    fn table_row_without_boundary_is_a_mismatch() {
        let set = boundaries(&["Bronx", "Brooklyn", "Manhattan", "Queens"]);
        let err = join(&set, &data::nyc_attributes()).unwrap_err();
        assert_eq!(err, ScoreError::JoinMismatch {
            missing_in_table: vec![],
            missing_in_boundaries: vec!["Staten Island".into()],
        });
    }

    #[test]
    fn boundary_without_row_is_a_mismatch() {
        let set = boundaries(&["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island", "Newark"]);
        let err = join(&set, &data::nyc_attributes()).unwrap_err();
        assert_eq!(err, ScoreError::JoinMismatch {
            missing_in_table: vec!["Newark".into()],
            missing_in_boundaries: vec![],
        });
    }

    #[test]
    fn empty_boundaries_list_every_table_row() {
        let err = join(&BoundarySet::default(), &data::nyc_attributes()).unwrap_err();
        assert_eq!(err, ScoreError::JoinMismatch {
            missing_in_table: vec![],
            missing_in_boundaries: data::BOROUGHS.iter().map(|b| b.to_string()).collect(),
        });
    }

    #[test]
    fn both_sides_empty_is_empty_input() {
        assert_eq!(join(&BoundarySet::default(), &AttributeTable::default()), Err(ScoreError::EmptyInput));
    }
}

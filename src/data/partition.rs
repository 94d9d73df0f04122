use super::model::{Dataset, Gender, GenderCodes};

// ---------------------------------------------------------------------------
// Scatter data split by gender
// ---------------------------------------------------------------------------

/// The `(t1, t2)` points of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPanel {
    pub gender: Gender,
    pub points: Vec<[f64; 2]>,
}

/// One figure: an overall title and one panel per [`Gender`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterFigure {
    pub title: String,
    pub panels: [ScatterPanel; 2],
    /// Records whose code matched neither category.
    pub excluded: usize,
}

/// Split a dataset into male and female scatter panels.
///
/// Point order within a panel follows record order. Records with an
/// unrecognised code end up in neither panel.
pub fn partition(dataset: &Dataset, codes: &GenderCodes, title: &str) -> ScatterFigure {
    let mut male = Vec::new();
    let mut female = Vec::new();
    let mut excluded = 0;

    for rec in &dataset.records {
        let point = [rec.weight_t1, rec.weight_t2];
        match codes.classify(&rec.gender) {
            Some(Gender::Male) => male.push(point),
            Some(Gender::Female) => female.push(point),
            None => excluded += 1,
        }
    }

    if excluded > 0 {
        log::warn!(
            "{}: {excluded} records match neither '{}' nor '{}' and are not plotted",
            dataset.label,
            codes.male,
            codes.female
        );
    }

    ScatterFigure {
        title: title.to_string(),
        panels: [
            ScatterPanel {
                gender: Gender::Male,
                points: male,
            },
            ScatterPanel {
                gender: Gender::Female,
                points: female,
            },
        ],
        excluded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset(rows: &[(&str, f64, f64)]) -> Dataset {
        let records = rows
            .iter()
            .map(|&(g, t1, t2)| Record {
                gender: g.to_string(),
                weight_t1: t1,
                weight_t2: t2,
            })
            .collect();
        Dataset::new("test", records, 0)
    }

    #[test]
    fn two_codes_cover_every_record() {
        let ds = dataset(&[
            ("H", 80.0, 79.0),
            ("F", 60.0, 61.0),
            ("H", 90.0, 85.0),
            ("F", 55.0, 55.5),
            ("F", 70.0, 68.0),
        ]);
        let fig = partition(&ds, &GenderCodes::default(), "Experimental group");
        let [male, female] = &fig.panels;
        assert_eq!(male.points.len() + female.points.len(), ds.len());
        assert_eq!(fig.excluded, 0);
        assert_eq!(fig.title, "Experimental group");
    }

    #[test]
    fn panels_keep_record_order() {
        let ds = dataset(&[("H", 1.0, 2.0), ("F", 3.0, 4.0), ("H", 5.0, 6.0)]);
        let fig = partition(&ds, &GenderCodes::default(), "t");
        assert_eq!(fig.panels[0].gender, Gender::Male);
        assert_eq!(fig.panels[0].points, vec![[1.0, 2.0], [5.0, 6.0]]);
        assert_eq!(fig.panels[1].gender, Gender::Female);
        assert_eq!(fig.panels[1].points, vec![[3.0, 4.0]]);
    }

    #[test]
    fn unknown_codes_are_excluded_from_both_panels() {
        let ds = dataset(&[("H", 1.0, 2.0), ("?", 3.0, 4.0), ("f", 5.0, 6.0)]);
        let fig = partition(&ds, &GenderCodes::default(), "t");
        assert_eq!(fig.panels[0].points.len(), 1);
        assert!(fig.panels[1].points.is_empty());
        assert_eq!(fig.excluded, 2);
    }
}

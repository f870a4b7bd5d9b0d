//! Tour creation form
//!
//! Raw text fields as typed by the operator, parsed into a [`TourDraft`].
//! Tag fields accept comma-separated lists; blank entries are dropped.

use shared::{Airport, Month, TourDraft};

#[derive(Debug, Clone, Default)]
pub struct TourForm {
    pub tour_name: String,
    pub month: String,
    pub year: String,
    pub arrival_date: String,
    pub departure_date: String,
    pub airport_name: String,
    pub airport_code: String,
    pub compania: String,
    pub destino: String,
    pub especial: String,
    pub plan: String,
}

/// Split a comma-separated tag field, trimming entries and dropping blanks.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl TourForm {
    /// Parse the raw fields into a draft. Unparseable numbers and months
    /// are left unset; the draft's own validation decides what is fatal.
    pub fn to_draft(&self) -> TourDraft {
        let airport = if self.airport_name.trim().is_empty() && self.airport_code.trim().is_empty()
        {
            None
        } else {
            Some(Airport {
                name: self.airport_name.trim().to_string(),
                code: self.airport_code.trim().to_string(),
                ..Airport::default()
            })
        };

        TourDraft {
            tour_name: self.tour_name.clone(),
            month: self.month.trim().parse::<Month>().ok(),
            year: self.year.trim().parse().ok(),
            arrival_date: self.arrival_date.trim().parse().ok(),
            departure_date: self.departure_date.trim().parse().ok(),
            airport,
            compania: parse_tag_list(&self.compania),
            destino: parse_tag_list(&self.destino),
            especial: parse_tag_list(&self.especial),
            plan: parse_tag_list(&self.plan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_lists_are_trimmed_and_filtered() {
        assert_eq!(
            parse_tag_list("family,  partner ,,friends"),
            vec!["family", "partner", "friends"]
        );
        assert!(parse_tag_list("").is_empty());
        assert!(parse_tag_list(" , ,").is_empty());
    }

    #[test]
    fn month_parsing_is_case_insensitive() {
        let form = TourForm {
            tour_name: "Merida PLUS".to_string(),
            month: "june".to_string(),
            ..Default::default()
        };
        let draft = form.to_draft();
        assert_eq!(draft.month, Some(Month::June));
    }

    #[test]
    fn unparseable_numbers_are_left_unset() {
        let form = TourForm {
            tour_name: "Merida PLUS".to_string(),
            month: "June".to_string(),
            year: "next year".to_string(),
            arrival_date: "".to_string(),
            ..Default::default()
        };
        let draft = form.to_draft();
        assert_eq!(draft.year, None);
        assert_eq!(draft.arrival_date, None);
    }
}

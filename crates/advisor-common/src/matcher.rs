use crate::catalog::{Catalog, ProductRecord};
use crate::error::RecommendError;

pub const QUERY_SEPARATOR: &str = " by ";

/// A parsed `"<product> by <company>"` query. Both needles are trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub product: String,
    pub company: String,
}

impl ProductQuery {
    /// The separator must appear exactly once; `"a by b by c"` is rejected.
    pub fn parse(input: &str) -> Result<Self, RecommendError> {
        let mut parts = input.split(QUERY_SEPARATOR);
        let (Some(product), Some(company), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(RecommendError::MalformedQuery);
        };

        Ok(Self {
            product: product.trim().to_lowercase(),
            company: company.trim().to_lowercase(),
        })
    }

    pub fn matches(&self, record: &ProductRecord) -> bool {
        record.product_name.to_lowercase().contains(&self.product)
            && record.company.to_lowercase().contains(&self.company)
    }
}

/// Every record matching `input`, in catalog order.
pub fn find_matches<'a>(
    input: &str,
    catalog: &'a Catalog,
) -> Result<Vec<&'a ProductRecord>, RecommendError> {
    let query = ProductQuery::parse(input)?;

    let matches: Vec<&ProductRecord> = catalog
        .records()
        .iter()
        .filter(|r| query.matches(r))
        .collect();

    if matches.is_empty() {
        return Err(RecommendError::NoMatch {
            query: input.to_string(),
        });
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CSV: &str = "product_name,company,price,rating,reviews,manufactured_in
Galaxy S23 Phone,Samsung,70000,4.6,2300,South Korea
Galaxy Tab,Samsung,30000,4.2,800,Vietnam
Redmi Note Phone,Xiaomi,15000,4.1,5000,India
iPhone 15,Apple,80000,4.8,9000,China
Phone Stand,Samsung Accessories,500,3.9,40,India
";

    fn catalog() -> Catalog {
        Catalog::from_reader(CSV.as_bytes()).expect("fixture should load")
    }

    #[test]
    fn parse_trims_and_lowercases() {
        let q = ProductQuery::parse("  Galaxy  by SAMSUNG ").unwrap();
        assert_eq!(q.product, "galaxy");
        assert_eq!(q.company, "samsung");
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert_eq!(
            ProductQuery::parse("galaxy samsung"),
            Err(RecommendError::MalformedQuery)
        );
        assert_eq!(ProductQuery::parse(""), Err(RecommendError::MalformedQuery));
        // separator needs the surrounding spaces
        assert_eq!(
            ProductQuery::parse("galaxy by"),
            Err(RecommendError::MalformedQuery)
        );
    }

    #[test]
    fn parse_rejects_repeated_separator() {
        assert_eq!(
            ProductQuery::parse("stand by me by samsung"),
            Err(RecommendError::MalformedQuery)
        );
    }

    #[test]
    fn malformed_query_message() {
        let err = ProductQuery::parse("galaxy").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter input in format: <product> by <company>"
        );
    }

    #[test]
    fn substring_match_on_both_columns_in_row_order() {
        let catalog = catalog();
        let matches = find_matches("phone by samsung", &catalog).unwrap();
        let names: Vec<&str> = matches.iter().map(|r| r.product_name.as_str()).collect();
        assert_eq!(names, vec!["Galaxy S23 Phone", "Phone Stand"]);
    }

    #[test]
    fn empty_needles_match_everything() {
        let catalog = catalog();
        let matches = find_matches(" by ", &catalog).unwrap();
        assert_eq!(matches.len(), catalog.len());
    }

    #[test]
    fn no_match_echoes_original_query() {
        let catalog = catalog();
        let err = find_matches("phone by sony", &catalog).unwrap_err();
        assert_eq!(
            err,
            RecommendError::NoMatch {
                query: "phone by sony".to_string()
            }
        );
        assert_eq!(err.to_string(), "No matching product found for 'phone by sony'");
    }

    #[test]
    fn no_match_keeps_original_casing_and_spacing() {
        let catalog = catalog();
        let err = find_matches("  Walkman by SONY", &catalog).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No matching product found for '  Walkman by SONY'"
        );
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let csv = "product_name,company,price,rating,reviews,manufactured_in\n\
                   C++ Primer Reader,Kindle (Amazon),9000,4,100,USA\n";
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        let matches = find_matches("c++ by (amazon)", &catalog).unwrap();
        assert_eq!(matches.len(), 1);
    }

    proptest! {
        #[test]
        fn matches_are_exactly_the_substring_hits(
            product in "[a-z]{0,3}",
            company in "[a-z]{0,3}",
        ) {
            let catalog = catalog();
            let input = format!("{product} by {company}");
            let expected: Vec<&ProductRecord> = catalog
                .records()
                .iter()
                .filter(|r| {
                    r.product_name.to_lowercase().contains(&product)
                        && r.company.to_lowercase().contains(&company)
                })
                .collect();

            match find_matches(&input, &catalog) {
                Ok(found) => prop_assert_eq!(found, expected),
                Err(RecommendError::NoMatch { query }) => {
                    prop_assert!(expected.is_empty());
                    prop_assert_eq!(query, input);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        #[test]
        fn inputs_without_separator_are_malformed(input in "[a-zA-Z0-9 ]{0,20}") {
            prop_assume!(!input.contains(QUERY_SEPARATOR));
            prop_assert_eq!(ProductQuery::parse(&input), Err(RecommendError::MalformedQuery));
        }
    }
}

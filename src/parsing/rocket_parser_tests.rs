#[cfg(test)]
mod tests {
    use crate::parsing::rocket_parser::parse_rocket;
    use crate::parsing::RowError;

    /// Test a fully populated row
    #[test]
    fn test_parse_rocket_basic() {
        let rocket =
            parse_rocket("0,Tsyklon-3,https://en.wikipedia.org/wiki/Tsyklon-3,39.0 m").unwrap();

        assert_eq!(rocket.id, "0");
        assert_eq!(rocket.name, "Tsyklon-3");
        assert_eq!(
            rocket.wiki.as_deref(),
            Some("https://en.wikipedia.org/wiki/Tsyklon-3")
        );
        assert_eq!(rocket.height, Some(39.0));
    }

    /// Test a quote-wrapped name containing a comma
    #[test]
    fn test_parse_rocket_quoted_name() {
        let rocket = parse_rocket("103,\"Angara A5/Briz-M, heavy\",https://en.wikipedia.org/wiki/Angara,55.4 m")
            .unwrap();
        assert_eq!(rocket.name, "Angara A5/Briz-M, heavy");
    }

    /// Test that an empty wiki token means absent, independent of height
    #[test]
    fn test_parse_rocket_empty_wiki_with_height() {
        let rocket = parse_rocket("7,Unha-2,,28.0 m").unwrap();
        assert_eq!(rocket.wiki, None);
        assert_eq!(rocket.height, Some(28.0));
    }

    /// Test a short row where both optionals are missing
    #[test]
    fn test_parse_rocket_two_fields() {
        let rocket = parse_rocket("12,Vector-H").unwrap();
        assert_eq!(rocket.wiki, None);
        assert_eq!(rocket.height, None);
    }

    /// Test wiki present but height token empty
    #[test]
    fn test_parse_rocket_wiki_without_height() {
        let rocket =
            parse_rocket("3,Shavit,https://en.wikipedia.org/wiki/Shavit,").unwrap();
        assert_eq!(rocket.wiki.as_deref(), Some("https://en.wikipedia.org/wiki/Shavit"));
        assert_eq!(rocket.height, None);
    }

    /// Test fewer than two tokens is malformed
    #[test]
    fn test_parse_rocket_too_few_fields() {
        assert!(matches!(
            parse_rocket("lonely"),
            Err(RowError::FieldCount { expected: 2, found: 1 })
        ));
    }

    /// Test more than four tokens is malformed, not silently truncated
    #[test]
    fn test_parse_rocket_too_many_fields() {
        assert!(matches!(
            parse_rocket("0,Tsyklon-3,https://en.wikipedia.org/wiki/Tsyklon-3,39.0 m,extra"),
            Err(RowError::FieldCount { expected: 4, found: 5 })
        ));
    }

    /// Test an unparseable height
    #[test]
    fn test_parse_rocket_bad_height() {
        assert!(matches!(
            parse_rocket("0,Tsyklon-3,,tall m"),
            Err(RowError::Number(_))
        ));
    }

    /// Test a height token missing the unit suffix
    #[test]
    fn test_parse_rocket_height_without_unit() {
        assert!(matches!(
            parse_rocket("0,Tsyklon-3,,39.0"),
            Err(RowError::Number(_))
        ));
    }
}

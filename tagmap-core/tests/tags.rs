#[cfg(test)]
mod tests {
    use tagmap_core::{GORM, JSON, SQL, Tags};

    #[test]
    fn tags_parse() {
        let tags = Tags::parse(r#"json:"name,omitempty" sql:"-" gorm:"column:full_name""#).unwrap();
        assert_eq!(tags.len(), 3);
        assert_eq!(tags.lookup(JSON), Some("name,omitempty"));
        assert_eq!(tags.lookup(SQL), Some("-"));
        assert_eq!(tags.lookup(GORM), Some("column:full_name"));
        assert_eq!(tags.lookup("xml"), None);
        assert_eq!(tags.get("xml"), "");
        assert_eq!(
            tags.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            ["json", "sql", "gorm"]
        );
    }

    #[test]
    fn tags_parse_empty_values() {
        let tags = Tags::parse(r#"json:"" default:"NULL""#).unwrap();
        assert_eq!(tags.lookup("json"), Some(""));
        assert_eq!(tags.get("default"), "NULL");
        assert!(Tags::parse("").unwrap().is_empty());
        assert!(Tags::parse("   ").unwrap().is_empty());
    }

    #[test]
    fn tags_parse_escapes() {
        let tags = Tags::parse(r#"json:"a\"b\\c" note:"line\nnext\ttab""#).unwrap();
        assert_eq!(tags.get("json"), "a\"b\\c");
        assert_eq!(tags.get("note"), "line\nnext\ttab");
        let tags = Tags::parse(r#"json:"ünïcode" sql:"名前""#).unwrap();
        assert_eq!(tags.get("json"), "ünïcode");
        assert_eq!(tags.get("sql"), "名前");
    }

    #[test]
    fn tags_parse_malformed() {
        assert!(Tags::parse(r#"json"name""#).is_err());
        assert!(Tags::parse(r#"json:name"#).is_err());
        assert!(Tags::parse(r#":"name""#).is_err());
        assert!(Tags::parse(r#"json:"name"#).is_err());
        assert!(Tags::parse(r#"json:"bad\q""#).is_err());
        let error = Tags::parse(r#"json:"ok" sql"#).unwrap_err();
        assert!(error.to_string().starts_with("Malformed tag"), "{error:#}");
    }

    #[test]
    fn tags_first_wins() {
        let tags = Tags::new().with("json", "first").with("json", "second");
        assert_eq!(tags.get("json"), "first");
        let tags: Tags = [("sql", "a"), ("gorm", "b")].into_iter().collect();
        assert_eq!(tags, Tags::new().with("sql", "a").with("gorm", "b"));
    }
}

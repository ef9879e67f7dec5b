#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use std::{collections::BTreeMap, env};
    use tagmap::{
        ExtractError, GORM, JSON, Kind, Mapping, Opaque, Record, SQL, Value, ZERO_INSTANT,
        extract,
    };
    use time::{OffsetDateTime, macros::datetime};

    fn init_logs() {
        let mut logger = env_logger::builder();
        logger
            .is_test(true)
            .format_file(true)
            .format_line_number(true);
        if env::var("RUST_LOG").is_err() {
            logger.filter_level(LevelFilter::Warn);
        }
        let _ = logger.try_init();
    }

    #[derive(Record)]
    struct Common {
        #[tag(json = "number", sql = "number")]
        pub number: i32,
    }

    #[derive(Record)]
    struct Person {
        #[tag(embed)]
        pub common: Common,
        #[tag(json = "name", sql = "full_name", gorm = "column:full_name")]
        pub name: String,
        #[tag(json = "age", sql = "age,omitempty")]
        pub age: f64,
        #[tag(json = "-", sql = "deleted_at", default = "null")]
        pub deleted_at: OffsetDateTime,
        #[tag(json = "secret")]
        secret: String,
    }

    #[derive(Record)]
    struct Counter {
        #[tag(sql = "value,omitempty")]
        pub value: i64,
    }

    #[derive(Record)]
    struct Address {
        #[tag(json = "city")]
        pub city: String,
    }

    #[derive(Record)]
    struct Customer {
        #[tag(json = "address")]
        pub address: Address,
        #[tag(json = "tags")]
        pub tags: Vec<String>,
        #[tag(json = "scores", sql = "scores,omitempty")]
        pub scores: BTreeMap<String, i32>,
        #[tag(json = "active")]
        pub active: bool,
        #[tag(json = "visits")]
        pub(crate) visits: i32,
    }

    #[derive(Record)]
    struct Wrapped<T> {
        #[tag(json = "inner")]
        pub inner: T,
        #[tag(json = "type", sql = "kind")]
        pub r#type: &'static str,
    }

    #[derive(Record)]
    struct Storage {
        #[tag(gorm = "column:id", sql = "id")]
        pub id: i32,
        #[tag(gorm = "cache", sql = "-")]
        pub cache: String,
        #[tag(gorm = "size,omitempty")]
        pub size: Option<i16>,
        #[tag(gorm = "total")]
        pub total: u64,
    }

    fn person() -> Person {
        Person {
            common: Common { number: 123123 },
            name: "Mayur".into(),
            age: 24.0,
            deleted_at: ZERO_INSTANT,
            secret: "hidden".into(),
        }
    }

    #[test]
    fn record_display_namespace() {
        init_logs();
        let person = person();
        let mapping = extract(&person, "").unwrap();
        assert_eq!(mapping.keys().collect::<Vec<_>>(), ["number", "name", "age"]);
        assert_eq!(mapping["name"], Value::String("Mayur"));
        assert_eq!(mapping["age"], Value::Float(24.0));
        assert_eq!(mapping["number"], Value::Int(123123));
        assert_eq!(mapping, extract(&person, JSON).unwrap());
        assert_eq!(mapping, person.tag_values(JSON).unwrap());
        assert!(!mapping.contains_key("secret"));
        assert!(!mapping.contains_key("-"));
    }

    #[test]
    fn record_storage_namespace() {
        init_logs();
        let mut person = person();
        {
            let mapping = extract(&person, SQL).unwrap();
            let expected: Mapping = [
                ("number", Value::Int(123123)),
                ("full_name", Value::String("Mayur")),
                ("age", Value::Float(24.0)),
                ("deleted_at", Value::Null),
            ]
            .into_iter()
            .collect();
            assert_eq!(mapping, expected);
        }

        let instant = datetime!(2024-05-01 12:30 UTC);
        person.age = 0.0;
        person.deleted_at = instant;
        let mapping = extract(&person, SQL).unwrap();
        assert_eq!(
            mapping.keys().collect::<Vec<_>>(),
            ["number", "full_name", "deleted_at"]
        );
        assert_eq!(
            mapping["deleted_at"].as_opaque().and_then(Opaque::timestamp),
            Some(instant)
        );
    }

    #[test]
    fn record_omitempty() {
        init_logs();
        let counter = Counter { value: 0 };
        assert!(extract(&counter, SQL).unwrap().is_empty());
        let counter = Counter { value: 5 };
        let mapping = extract(&counter, SQL).unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping["value"], Value::Int(5));
        assert!(extract(&counter, JSON).unwrap().is_empty());
    }

    #[test]
    fn record_not_a_struct() {
        init_logs();
        let error = extract(&42i64, "").unwrap_err();
        assert_eq!(
            error.downcast_ref::<ExtractError>(),
            Some(&ExtractError::NotAStruct { kind: Kind::Int64 })
        );
        let people = vec![person()];
        let error = extract(&people, "").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Cannot extract tag values from a value of kind `slice`, a struct is expected"
        );
        let boxed = Box::new(person());
        assert_eq!(extract(&boxed, "").unwrap().len(), 3);
    }

    #[test]
    fn record_opaque_values() {
        init_logs();
        let customer = Customer {
            address: Address {
                city: "Pune".into(),
            },
            tags: vec!["new".into()],
            scores: BTreeMap::new(),
            active: true,
            visits: 3,
        };
        let mapping = extract(&customer, "").unwrap();
        assert_eq!(
            mapping.keys().collect::<Vec<_>>(),
            ["address", "tags", "scores", "active"]
        );
        let address = mapping["address"]
            .as_opaque()
            .and_then(|v| v.downcast_ref::<Address>())
            .expect("Expected the address record");
        assert_eq!(address.city, "Pune");
        assert_eq!(
            mapping["tags"]
                .as_opaque()
                .and_then(|v| v.downcast_ref::<Vec<String>>()),
            Some(&customer.tags)
        );
        assert_eq!(mapping["scores"].as_opaque().map(Opaque::kind), Some(Kind::Map));
        assert_eq!(mapping["active"], Value::Bool(true));
        // Nested records are not extracted
        let nested = extract(address, "").unwrap();
        assert_eq!(nested["city"], Value::String("Pune"));
        assert!(extract(&customer, SQL).unwrap().is_empty());
    }

    #[test]
    fn record_generic() {
        init_logs();
        let wrapped = Wrapped {
            inner: 7i16,
            r#type: "short",
        };
        let mapping = extract(&wrapped, "").unwrap();
        assert_eq!(mapping["inner"], Value::Int(7));
        assert_eq!(mapping["type"], Value::String("short"));
        assert_eq!(extract(&wrapped, SQL).unwrap()["kind"], Value::String("short"));

        let wrapped = Wrapped {
            inner: Counter { value: 1 },
            r#type: "counter",
        };
        let mapping = extract(&wrapped, "").unwrap();
        assert!(matches!(
            mapping["inner"],
            Value::Opaque(Opaque::Record(..))
        ));

        let wrapped = Wrapped {
            inner: 1usize,
            r#type: "size",
        };
        let error = extract(&wrapped, "").unwrap_err();
        assert_eq!(
            error.downcast_ref::<ExtractError>(),
            Some(&ExtractError::UnsupportedKind {
                field: "inner",
                kind: Kind::UInt,
            })
        );
    }

    #[test]
    fn record_object_relational_namespace() {
        init_logs();
        let storage = Storage {
            id: 10,
            cache: "warm".into(),
            size: None,
            total: 0,
        };
        let error = extract(&storage, GORM).unwrap_err();
        assert_eq!(
            error.downcast_ref::<ExtractError>(),
            Some(&ExtractError::UnsupportedKind {
                field: "total",
                kind: Kind::UInt64,
            })
        );
        let person = person();
        let mapping = extract(&person, GORM).unwrap();
        assert_eq!(mapping.keys().collect::<Vec<_>>(), ["full_name"]);
        assert_eq!(mapping["full_name"], Value::String("Mayur"));
    }

    #[derive(Record)]
    struct StorageChecked {
        #[tag(gorm = "column:id", sql = "id")]
        pub id: i32,
        #[tag(gorm = "cache", sql = "-")]
        pub cache: String,
        #[tag(gorm = "size,omitempty")]
        pub size: Option<i16>,
    }

    #[test]
    fn record_storage_veto() {
        init_logs();
        let storage = StorageChecked {
            id: 10,
            cache: "warm".into(),
            size: None,
        };
        {
            let mapping = extract(&storage, GORM).unwrap();
            assert_eq!(mapping.keys().collect::<Vec<_>>(), ["id"]);
            assert_eq!(mapping["id"], Value::Int(10));
        }
        let storage = StorageChecked {
            size: Some(0),
            ..storage
        };
        let error = extract(&storage, GORM).unwrap_err();
        assert_eq!(
            error.downcast_ref::<ExtractError>(),
            Some(&ExtractError::UnsupportedKind {
                field: "size",
                kind: Kind::Pointer,
            })
        );
        let mapping = extract(&storage, SQL).unwrap();
        assert_eq!(mapping.keys().collect::<Vec<_>>(), ["id"]);
    }

    #[derive(Record)]
    struct Row {
        #[tag(sql = "maybe")]
        pub maybe: Option<i32>,
        #[tag(sql = "optional", default = "null")]
        pub optional: Option<i32>,
        #[tag(sql = "small")]
        pub small: i16,
        #[tag(sql = "byte")]
        pub byte: u8,
    }

    #[test]
    fn record_strict_kinds() {
        init_logs();
        let unsupported = |row: &Row| {
            let error = extract(row, SQL).unwrap_err();
            match error.downcast_ref::<ExtractError>() {
                Some(ExtractError::UnsupportedKind { field, kind }) => (*field, *kind),
                _ => panic!("Unexpected error: {error:#}"),
            }
        };
        let mut row = Row {
            maybe: Some(5),
            optional: None,
            small: -1,
            byte: 7,
        };
        assert_eq!(unsupported(&row), ("maybe", Kind::Pointer));
        row.maybe = None;
        assert_eq!(unsupported(&row), ("maybe", Kind::Invalid));

        #[derive(Record)]
        struct Narrow {
            #[tag(sql = "optional", default = "null")]
            pub optional: Option<i32>,
            #[tag(sql = "small")]
            pub small: i16,
            #[tag(sql = "byte,omitempty")]
            pub byte: u8,
        }
        let narrow = Narrow {
            optional: None,
            small: -1,
            byte: 0,
        };
        {
            let mapping = extract(&narrow, SQL).unwrap();
            assert_eq!(mapping.keys().collect::<Vec<_>>(), ["optional", "small"]);
            assert_eq!(mapping["optional"], Value::Null);
            assert_eq!(mapping["small"], Value::Int(-1));
        }
        let narrow = Narrow { byte: 7, ..narrow };
        let error = extract(&narrow, SQL).unwrap_err();
        assert_eq!(
            error.downcast_ref::<ExtractError>(),
            Some(&ExtractError::UnsupportedKind {
                field: "byte",
                kind: Kind::UInt8,
            })
        );
        let narrow = Narrow {
            optional: Some(0),
            byte: 0,
            ..narrow
        };
        assert_eq!(
            extract(&narrow, SQL)
                .unwrap_err()
                .downcast_ref::<ExtractError>(),
            Some(&ExtractError::UnsupportedKind {
                field: "optional",
                kind: Kind::Pointer,
            })
        );
    }

    #[test]
    fn record_is_zero() {
        let counter = Counter { value: 0 };
        assert!(counter.is_zero());
        assert!(!Counter { value: 2 }.is_zero());
        let person = person();
        assert!(!person.is_zero());
        assert!(tagmap::is_default(&Common { number: 0 }));
    }
}

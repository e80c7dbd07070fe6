//! Messages shaped like the output of the validator code generator.

use std::sync::LazyLock;

use pretty_assertions::assert_eq;
use prost_reflect::Value;

use prost_validators::types::{FieldValidator, OneofValidator};
use prost_validators::{
    Error, FieldRules, MESSAGE_VIOLATION, OneofRules, Validatable, Validator, Validators,
    Violations, call_validators_if_exists, field_error,
};

static PERSON_NAME: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new(&FieldValidator {
        string_not_empty: Some(true),
        ..Default::default()
    })
    .expect("name rules compile")
});

static PERSON_AGE: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new(&FieldValidator {
        int_gt: Some(0),
        ..Default::default()
    })
    .expect("age rules compile")
});

static PERSON_NICK: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new(&FieldValidator {
        length_lt: Some(8),
        human_error: Some("nickname is too long".to_string()),
        ..Default::default()
    })
    .expect("nick rules compile")
});

static PARENT_CHILD: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new(&FieldValidator {
        msg_exists: Some(true),
        ..Default::default()
    })
    .expect("child rules compile")
});

static PARENT_ITEMS: LazyLock<FieldRules> = LazyLock::new(|| {
    FieldRules::new(&FieldValidator {
        repeated_count_max: Some(4),
        ..Default::default()
    })
    .expect("items rules compile")
});

static PARENT_KIND: LazyLock<OneofRules> =
    LazyLock::new(|| OneofRules::new(&OneofValidator { required: Some(true) }));

#[derive(Clone, Default)]
struct Person {
    name: String,
    age: i32,
    nick: String,
}

impl Person {
    fn valid() -> Self {
        Self {
            name: "ada".to_string(),
            age: 36,
            nick: String::new(),
        }
    }
}

impl Validator for Person {
    fn validate(&self) -> Result<(), Error> {
        let mut errors = Violations::new();
        PERSON_NAME.evaluate("name", Some(&Value::String(self.name.clone())), &mut errors);
        PERSON_AGE.evaluate("age", Some(&Value::I32(self.age)), &mut errors);
        PERSON_NICK.evaluate("nick", Some(&Value::String(self.nick.clone())), &mut errors);
        errors.into_result()
    }
}

impl Validators for Person {
    fn validate_all(&self) -> Result<(), Error> {
        self.validate()
    }
}

impl Validatable for Person {
    fn as_validator(&self) -> Option<&dyn Validator> {
        Some(self)
    }

    fn as_validators(&self) -> Option<&dyn Validators> {
        Some(self)
    }
}

enum Kind {
    Email,
    Phone,
}

#[derive(Default)]
struct Parent {
    child: Option<Person>,
    items: Vec<Person>,
    // Two slots so a test can set more than one member.
    kind: Option<Kind>,
    extra_kind: Option<Kind>,
}

impl Validator for Parent {
    fn validate(&self) -> Result<(), Error> {
        let mut errors = Violations::new();
        self.validate_fields(&mut errors);
        errors.into_result()
    }
}

impl Parent {
    fn validate_fields(&self, errors: &mut Violations) {
        let child = self.child.as_ref().map(|_| Value::Bool(true));
        PARENT_CHILD.evaluate("child", child.as_ref(), errors);

        let items = Value::List(self.items.iter().map(|_| Value::Bool(true)).collect());
        PARENT_ITEMS.evaluate("items", Some(&items), errors);

        let set = usize::from(self.kind.is_some()) + usize::from(self.extra_kind.is_some());
        PARENT_KIND.evaluate("kind", set, errors);
    }
}

impl Validators for Parent {
    fn validate_all(&self) -> Result<(), Error> {
        let mut errors = Violations::new();
        self.validate_fields(&mut errors);
        errors.add_validation_error(
            "child",
            MESSAGE_VIOLATION,
            call_validators_if_exists(&self.child),
        );
        for (index, item) in self.items.iter().enumerate() {
            errors.add_validations_error(
                "items",
                MESSAGE_VIOLATION,
                index,
                call_validators_if_exists(item),
            );
        }
        errors.into_result()
    }
}

fn report(result: Result<(), Error>) -> Violations {
    match result {
        Err(Error::Validation(report)) => report,
        Err(other) => panic!("unexpected error: {other}"),
        Ok(()) => panic!("expected a validation failure"),
    }
}

#[test]
fn invalid_person_reports_each_failed_field() {
    let person = Person {
        name: String::new(),
        age: -1,
        nick: String::new(),
    };
    let errors = report(person.validate());

    let records: Vec<_> = errors
        .iter()
        .map(|v| (v.field(), v.violation(), v.message()))
        .collect();
    assert_eq!(
        records,
        vec![
            ("name", "string_not_empty", "one or more items failed validation"),
            ("age", "int_gt", "one or more items failed validation"),
        ]
    );
    assert_eq!(errors.to_string(), "bad request");
}

#[test]
fn human_error_text_is_reported_verbatim() {
    let person = Person {
        nick: "much too long".to_string(),
        ..Person::valid()
    };
    let errors = report(person.validate());
    let record = errors.iter().next().expect("one record");
    assert_eq!(record.field(), "nick");
    assert_eq!(record.message(), "nickname is too long");
}

#[test]
fn valid_parent_passes() {
    let parent = Parent {
        child: Some(Person::valid()),
        items: vec![Person::valid(); 3],
        kind: Some(Kind::Email),
        ..Default::default()
    };
    assert!(parent.validate().is_ok());
    assert!(parent.validate_all().is_ok());
}

#[test]
fn invalid_child_nests_its_report() {
    let child = Person {
        age: 0,
        ..Person::valid()
    };
    let child_report = report(child.validate_all());
    let parent = Parent {
        child: Some(child),
        kind: Some(Kind::Phone),
        ..Default::default()
    };

    // the parent's own fields are fine
    assert!(parent.validate().is_ok());

    let errors = report(parent.validate_all());
    assert_eq!(errors.len(), 1);
    let record = errors.iter().next().expect("one record");
    assert_eq!(record.field(), "child");
    assert_eq!(record.violation(), MESSAGE_VIOLATION);
    assert_eq!(record.message(), "invalid");
    assert_eq!(record.nested(), Some(&child_report));
}

#[test]
fn only_failing_items_are_indexed() {
    let mut items = vec![Person::valid(); 4];
    items[2].name = String::new();
    let parent = Parent {
        child: Some(Person::valid()),
        items,
        kind: Some(Kind::Email),
        ..Default::default()
    };

    let errors = report(parent.validate_all());
    let indexed: Vec<_> = errors.iter().map(|v| (v.field(), v.index())).collect();
    assert_eq!(indexed, vec![("items", 2)]);

    let leaves: Vec<_> = errors
        .leaves()
        .into_iter()
        .map(|(path, v)| (path, v.violation().to_string()))
        .collect();
    assert_eq!(
        leaves,
        vec![("items[2].name".to_string(), "string_not_empty".to_string())]
    );
}

#[test]
fn parent_rules_cover_presence_counts_and_oneofs() {
    let parent = Parent {
        items: vec![Person::valid(); 5],
        kind: Some(Kind::Email),
        extra_kind: Some(Kind::Phone),
        ..Default::default()
    };
    let errors = report(parent.validate());
    let records: Vec<_> = errors.iter().map(|v| (v.field(), v.violation())).collect();
    assert_eq!(
        records,
        vec![
            ("child", "msg_exists"),
            ("items", "repeated_count_max"),
            ("kind", "required"),
        ]
    );

    let empty = Parent::default();
    let errors = report(empty.validate());
    assert!(errors.iter().any(|v| v.field() == "kind" && v.violation() == "required"));
}

#[test]
fn field_paths_compose_around_validation_errors() {
    let child = Person {
        name: String::new(),
        ..Person::valid()
    };
    let err = field_error("parent", field_error("child", child.validate().unwrap_err()));

    let Error::Field(wrapper) = &err else {
        panic!("expected a field error, got {err}");
    };
    assert_eq!(wrapper.path(), ["parent", "child"]);
    assert!(matches!(wrapper.cause(), Error::Validation(_)));
    assert_eq!(err.to_string(), "invalid field parent.child: bad request");
}

//! Property-based tests for SCPD serialization
//!
//! Serializing any service whose actions all carry at least one argument and
//! parsing the result back must reproduce the same model.

use proptest::prelude::*;

use scpd::{parse_str, to_xml};
use upnp_typedef::{Action, Argument, ArgumentDirection, Service, StateVariable};

/// Names as they appear in real descriptions, plus characters that need escaping
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_&<>]{0,16}"
}

fn data_type_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["string", "boolean", "ui2", "ui4", "i4", "r8", "uri", "x-vendor"])
}

fn direction_strategy() -> impl Strategy<Value = ArgumentDirection> {
    prop::sample::select(vec![ArgumentDirection::In, ArgumentDirection::Out])
}

fn argument_strategy() -> impl Strategy<Value = Argument> {
    (name_strategy(), direction_strategy(), name_strategy())
        .prop_map(|(name, direction, related)| Argument::new(name, direction, related))
}

fn service_strategy() -> impl Strategy<Value = Service> {
    let actions = prop::collection::vec(
        (name_strategy(), prop::collection::vec(argument_strategy(), 1..5)),
        1..6,
    );
    let variables = prop::collection::vec(
        (name_strategy(), data_type_strategy(), any::<bool>()),
        1..8,
    );

    (actions, variables).prop_map(|(actions, variables)| {
        let mut service = Service::new();
        for (index, (name, arguments)) in actions.into_iter().enumerate() {
            // Suffix keeps action names unique within the service.
            let mut action = Action::new(format!("{}{}", name, index));
            for argument in arguments {
                action.add_argument(argument);
            }
            service.add_action(action).unwrap();
        }
        for (name, data_type, evented) in variables {
            let send_events = if evented { "yes" } else { "no" };
            service.add_state_variable(StateVariable::new(name, data_type, None, send_events));
        }
        service
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_serialize_then_parse_preserves_model(service in service_strategy()) {
        let xml = to_xml(&service).expect("generated names are valid XML text");

        let mut reparsed = Service::new();
        let report = parse_str(&xml, &mut reparsed).expect("serialized document should parse");

        prop_assert!(report.is_clean());
        prop_assert_eq!(&reparsed, &service);
    }

    #[test]
    fn prop_write_into_never_exceeds_capacity(service in service_strategy(), capacity in 0usize..4096) {
        let expected = to_xml(&service).expect("generated names are valid XML text");
        let mut buf = vec![0u8; capacity];

        match scpd::write_into(&service, &mut buf) {
            Ok(written) => {
                prop_assert!(written <= capacity);
                prop_assert_eq!(&buf[..written], expected.as_bytes());
            }
            Err(scpd::ScpdError::BufferTooSmall { required, capacity: reported }) => {
                prop_assert_eq!(required, expected.len());
                prop_assert_eq!(reported, capacity);
                prop_assert!(required > capacity);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}

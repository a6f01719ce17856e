use super::*;
use crate::command::{CommandArgs, CommandContext};
use crate::errors::{EvalErrorKind, EvalResult};
use pretty_assertions::assert_eq;

#[test]
fn builtin_arities() {
    let registry = CommandRegistry::with_builtins();
    let expected = [
        ("help", 0),
        ("exit", 0),
        ("quit", 0),
        ("set", 2),
        ("get", 1),
        ("add", 2),
        ("list", 0),
        ("delete", 1),
        ("multiply", 2),
        ("clear", 0),
        ("print", 1),
    ];
    for (name, arity) in expected {
        assert_eq!(registry.arity(name), Ok(arity), "arity of {name}");
    }
    assert_eq!(registry.len(), expected.len());
}

#[test]
fn unknown_name_fails_lookup() {
    let registry = CommandRegistry::with_builtins();
    let err = registry.arity("frobnicate").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnknownCommand {
            name: "frobnicate".to_string()
        }
    );
    assert!(registry.get("frobnicate").is_none());
    assert!(!registry.contains("frobnicate"));
}

#[test]
fn names_are_sorted() {
    let registry = CommandRegistry::with_builtins();
    let names = registry.names();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert!(names.contains(&"multiply"));
}

#[test]
fn new_registry_is_empty() {
    let registry = CommandRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.names().is_empty());
}

struct Shout;

impl Command for Shout {
    fn name(&self) -> &'static str {
        "shout"
    }

    fn arity(&self) -> usize {
        1
    }

    fn usage(&self) -> &'static str {
        "shout [text]"
    }

    fn description(&self) -> &'static str {
        "Upper-cases its argument."
    }

    fn execute(&self, args: &CommandArgs, _ctx: &mut CommandContext<'_>) -> EvalResult {
        let [text] = args.exact::<1>(self.usage())?;
        Ok(text.to_uppercase())
    }
}

#[test]
fn custom_commands_can_be_registered() {
    let mut registry = CommandRegistry::new();
    registry.register(Shout);
    assert_eq!(registry.arity("shout"), Ok(1));
    assert_eq!(registry.names(), vec!["shout"]);
}

#[test]
fn register_replaces_same_name() {
    let mut registry = CommandRegistry::with_builtins();
    let before = registry.len();
    registry.register(crate::builtins::PrintCommand);
    assert_eq!(registry.len(), before);
}

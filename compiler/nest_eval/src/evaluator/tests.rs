use super::*;
use crate::command::CommandArgs;
use crate::errors::EvalErrorKind;
use crate::registry::CommandRegistry;
use crate::store::VariableStore;
use nest_lexer::tokenize;
use pretty_assertions::assert_eq;

/// Zero-arity command that bumps the variable `n` and returns the new count.
///
/// Lets tests observe exactly when (and whether) a frame was reduced.
struct Count;

impl Command for Count {
    fn name(&self) -> &'static str {
        "count"
    }

    fn arity(&self) -> usize {
        0
    }

    fn usage(&self) -> &'static str {
        "count"
    }

    fn description(&self) -> &'static str {
        "Increments n."
    }

    fn execute(&self, args: &CommandArgs, ctx: &mut CommandContext<'_>) -> EvalResult {
        args.exact::<0>(self.usage())?;
        let next = ctx.store().get("n").map_or(Ok(0), str::parse::<i64>).unwrap_or(0) + 1;
        ctx.store_mut().set("n", next.to_string());
        Ok(next.to_string())
    }
}

struct Fixture {
    store: VariableStore,
    registry: CommandRegistry,
    running: bool,
}

impl Fixture {
    fn new() -> Self {
        let mut registry = CommandRegistry::with_builtins();
        registry.register(Count);
        Fixture {
            store: VariableStore::new(),
            registry,
            running: true,
        }
    }

    fn eval(&mut self, line: &str) -> EvalResult {
        let tokens = tokenize(line);
        let ctx = CommandContext::new(&mut self.store, &self.registry, &mut self.running);
        Evaluator::new(ctx).eval(&tokens)
    }

    fn ok(&mut self, line: &str) -> String {
        match self.eval(line) {
            Ok(output) => output,
            Err(err) => panic!("`{line}` failed: {err}"),
        }
    }

    fn err(&mut self, line: &str) -> EvalErrorKind {
        match self.eval(line) {
            Ok(output) => panic!("`{line}` succeeded with {output:?}"),
            Err(err) => err.kind,
        }
    }
}

// Basics

#[test]
fn empty_line_is_noop() {
    let mut fx = Fixture::new();
    assert_eq!(fx.ok(""), "");
    assert_eq!(fx.ok("    "), "");
}

#[test]
fn set_then_get() {
    let mut fx = Fixture::new();
    let confirmation = fx.ok("set x 5");
    assert!(confirmation.contains('x') && confirmation.contains('5'));
    assert_eq!(fx.ok("get x"), "5");
}

#[test]
fn irregular_spacing_is_tolerated() {
    let mut fx = Fixture::new();
    fx.ok("set  x   5");
    assert_eq!(fx.ok("  get x "), "5");
}

#[test]
fn add_and_multiply() {
    let mut fx = Fixture::new();
    assert_eq!(fx.ok("add 2 3"), "5");
    assert_eq!(fx.ok("multiply 6 7"), "42");
}

// Additional arguments

#[test]
fn trailing_additional_arg_reaches_saturated_root() {
    let mut fx = Fixture::new();
    assert_eq!(fx.ok("add 2 3 &4"), "9");
    assert_eq!(fx.ok("add 2 3 &4 &5"), "14");
}

#[test]
fn additional_args_may_appear_anywhere_before_saturation() {
    let mut fx = Fixture::new();
    assert_eq!(fx.ok("add &4 2 3"), "9");
    assert_eq!(fx.ok("add 2 &4 3"), "9");
}

#[test]
fn additional_arg_after_nested_goes_to_innermost_frame() {
    let mut fx = Fixture::new();
    // `&10` attaches to the inner add, which is on top when it is read.
    assert_eq!(fx.ok("add 1 @add 2 3 &10"), "16");
    // Here the inner add has already reduced, so `&10` belongs to the root.
    assert_eq!(fx.ok("add &10 1 @add 2 3"), "16");
}

// Nesting

#[test]
fn nested_result_becomes_positional() {
    let mut fx = Fixture::new();
    assert_eq!(fx.ok("set z @add 1 2"), "Set z to 3");
    assert_eq!(fx.ok("get z"), "3");
    assert_eq!(fx.ok("multiply @add 1 2 3"), "9");
    assert_eq!(fx.ok("print @multiply 6 7"), "42");
}

#[test]
fn deep_nesting_reduces_bottom_up() {
    let mut fx = Fixture::new();
    assert_eq!(fx.ok("add 1 @add 2 @add 3 @add 4 5"), "15");
}

#[test]
fn in_band_not_found_flows_into_parent() {
    let mut fx = Fixture::new();
    fx.ok("set x @get missing");
    assert_eq!(fx.ok("get x"), "Error: variable 'missing' not found");
}

#[test]
fn add_with_missing_nested_get_is_invalid_number() {
    let mut fx = Fixture::new();
    fx.ok("set x 1");
    let kind = fx.err("add x @get y");
    assert_eq!(
        kind,
        EvalErrorKind::InvalidNumber {
            value: "Error: variable 'y' not found".to_string()
        }
    );
    assert_eq!(fx.store.sorted_entries(), vec![("x", "1")]);
}

#[test]
fn zero_arity_nested_command_reduces_on_push() {
    let mut fx = Fixture::new();
    assert_eq!(fx.ok("add @count @count"), "3");
    assert_eq!(fx.store.get("n"), Some("2"));
    assert_eq!(fx.ok("set v @list"), "Set v to n -> 2");
}

#[test]
fn zero_arity_nested_runs_before_later_siblings_are_read() {
    let mut fx = Fixture::new();
    let kind = fx.err("add @count @nope");
    assert_eq!(
        kind,
        EvalErrorKind::UnknownCommand {
            name: "nope".to_string()
        }
    );
    // `count` already reduced; nothing rolls it back.
    assert_eq!(fx.store.get("n"), Some("1"));
}

#[test]
fn nested_help_topic() {
    let mut fx = Fixture::new();
    fx.ok("set h @help &%get");
    assert_eq!(
        fx.store.get("h"),
        Some("Usage: get [varName]\nRetrieves the value of the specified variable.")
    );
}

// Early termination

#[test]
fn root_saturation_ignores_trailing_tokens() {
    let mut fx = Fixture::new();
    fx.ok("set x 5");
    assert_eq!(fx.ok("get x ignored_tokens"), "5");
    assert_eq!(fx.ok("get x @nope and more"), "5");
}

#[test]
fn unread_tokens_are_not_evaluated() {
    let mut fx = Fixture::new();
    assert_eq!(fx.ok("add 1 1 @count"), "2");
    assert_eq!(fx.store.get("n"), None);
}

// Zero-arity roots

#[test]
fn zero_arity_root_absorbs_plain_token_then_fails() {
    let mut fx = Fixture::new();
    let kind = fx.err("list extra");
    assert_eq!(
        kind,
        EvalErrorKind::UsageError {
            usage: "list".to_string()
        }
    );
}

#[test]
fn zero_arity_root_reduces_after_additional_arg() {
    let mut fx = Fixture::new();
    // `list` saturates once `&x` is absorbed, so `extra` is never read.
    assert_eq!(fx.ok("list &x extra"), "No variables stored.");
}

#[test]
fn clear_then_list() {
    let mut fx = Fixture::new();
    fx.ok("set a 1");
    assert_eq!(fx.ok("clear"), "Cleared all variables.");
    assert_eq!(fx.ok("list"), "No variables stored.");
}

#[test]
fn exit_clears_running_flag() {
    let mut fx = Fixture::new();
    assert_eq!(fx.ok("exit"), "Exiting program...");
    assert!(!fx.running);
}

// Failures

#[test]
fn incomplete_command_reports_innermost_frame() {
    let mut fx = Fixture::new();
    assert_eq!(
        fx.err("set x"),
        EvalErrorKind::IncompleteCommand {
            command: "set".to_string()
        }
    );
    assert_eq!(
        fx.err("add 1 @get"),
        EvalErrorKind::IncompleteCommand {
            command: "get".to_string()
        }
    );
}

#[test]
fn unknown_root_command() {
    let mut fx = Fixture::new();
    let expected = EvalErrorKind::UnknownCommand {
        name: "frobnicate".to_string(),
    };
    assert_eq!(fx.err("frobnicate"), expected);
    assert_eq!(fx.err("frobnicate 1 2"), expected);
}

#[test]
fn root_token_is_not_classified() {
    let mut fx = Fixture::new();
    assert_eq!(
        fx.err("@get x"),
        EvalErrorKind::UnknownCommand {
            name: "@get".to_string()
        }
    );
}

#[test]
fn bare_nested_sigil_names_empty_command() {
    let mut fx = Fixture::new();
    assert_eq!(
        fx.err("get @"),
        EvalErrorKind::UnknownCommand {
            name: String::new()
        }
    );
}

#[test]
fn failed_line_keeps_earlier_mutations() {
    let mut fx = Fixture::new();
    let kind = fx.err("add @set a 1 b");
    assert!(matches!(kind, EvalErrorKind::InvalidNumber { .. }));
    assert_eq!(fx.store.get("a"), Some("1"));
}

mod proptest_eval {
    use super::Fixture;
    use proptest::prelude::*;

    fn token() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("set".to_string()),
            Just("get".to_string()),
            Just("add".to_string()),
            Just("multiply".to_string()),
            Just("list".to_string()),
            Just("@get".to_string()),
            Just("@add".to_string()),
            Just("@list".to_string()),
            Just("&1".to_string()),
            Just("x".to_string()),
            Just("7".to_string()),
            "-?[0-9]{1,3}",
        ]
    }

    proptest! {
        #[test]
        fn arbitrary_lines_never_panic(tokens in proptest::collection::vec(token(), 0..12)) {
            let mut fx = Fixture::new();
            let line = tokens.join(" ");
            let _ = fx.eval(&line);
        }

        #[test]
        fn add_of_two_literals(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            let mut fx = Fixture::new();
            let output = fx.ok(&format!("add {a} {b}"));
            prop_assert_eq!(output, (a + b).to_string());
        }
    }
}

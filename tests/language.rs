use std::{cell::RefCell, fs, rc::Rc, thread};

use indoc::indoc;
use quirk::{
    Interpreter,
    ast::{Expr, NumberLiteral, UnaryOperator},
    config::InterpreterConfig,
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::MAX_EXPRESSION_DEPTH,
            function::core::{Arity, BUILTIN_FUNCTIONS},
        },
        lexer::TokenKind,
        parser::core::MAX_NESTING_DEPTH,
        value::core::Value,
    },
    parse, tokenize,
};
use tempfile::TempDir;
use walkdir::WalkDir;

fn output_with(config: InterpreterConfig, src: &str) -> Result<String, Error> {
    let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
    let mut interpreter = Interpreter::with_config(config).with_output(buffer.clone());
    interpreter.run_source(src)?;
    let bytes = buffer.borrow().clone();
    Ok(String::from_utf8(bytes).expect("output is UTF-8"))
}

fn output_of(src: &str) -> Result<String, Error> {
    output_with(InterpreterConfig::default(), src)
}

fn assert_success(src: &str) -> String {
    output_of(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_failure(src: &str) -> Error {
    match output_of(src) {
        Ok(output) => panic!("Script succeeded but was expected to fail\n{src}\noutput: {output}"),
        Err(e) => e,
    }
}

fn runtime_failure(src: &str) -> RuntimeError {
    match assert_failure(src) {
        Error::Runtime(e) => e,
        Error::Syntax(e) => panic!("Expected a runtime fault, got: {e}"),
    }
}

fn syntax_failure(src: &str) -> ParseError {
    match assert_failure(src) {
        Error::Syntax(e) => e,
        Error::Runtime(e) => panic!("Expected a syntax fault, got: {e}"),
    }
}

fn write_module(dir: &TempDir, name: &str, source: &str) {
    fs::write(dir.path().join(format!("{name}.qk")), source).expect("write module file");
}

fn modules_in(dir: &TempDir) -> InterpreterConfig {
    InterpreterConfig::default().with_search_paths([dir.path()])
}

/// Runs `f` on a thread whose stack fits deeply nested programs in debug
/// builds.
fn on_large_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    thread::Builder::new().stack_size(64 * 1024 * 1024)
                          .spawn(f)
                          .expect("spawn test thread")
                          .join()
                          .expect("test thread panicked")
}

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;
    let config = InterpreterConfig::default().with_search_path("tests/scripts/modules");

    for entry in
        WalkDir::new("tests/scripts").max_depth(1)
                                     .into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "qk"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read \
                                                                     {expected_path:?}: {e}")
                                                         });

        count += 1;
        match output_with(config.clone(), &source) {
            Ok(output) => assert_eq!(output, expected, "Unexpected output from {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn tokenizes_simple_assignment() {
    let tokens = tokenize("x = 5 + 3").unwrap();
    let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
    let texts = tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();

    assert_eq!(kinds,
               [TokenKind::Ident, TokenKind::Equal, TokenKind::Number, TokenKind::Plus, TokenKind::Number]);
    assert_eq!(texts, ["x", "=", "5", "+", "3"]);
    assert!(tokens.iter().all(|t| t.line == 1));
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(assert_success("x = 5 + 3\ny = x + 10\nprint y"), "18\n");
    assert_eq!(assert_success("print 1 + 2 * 3, (1 + 2) * 3, 10 - 4 - 3"), "7 9 3\n");
    assert_eq!(assert_success("print 7 / 2, 4 / 2, 7.5 // 2"), "3.5 2.0 3.0\n");
}

#[test]
fn floor_division_and_modulo_follow_the_divisor() {
    for a in -9_i64..=9 {
        for b in [-4_i64, -3, -2, -1, 1, 2, 3, 4] {
            let quotient = (a as f64 / b as f64).floor() as i64;
            let remainder = a - quotient * b;
            let output = assert_success(&format!("print {a} // {b}, {a} % {b}"));
            assert_eq!(output, format!("{quotient} {remainder}\n"), "{a} // {b}, {a} % {b}");
        }
    }
}

#[test]
fn division_by_zero_faults() {
    for src in ["print 1 / 0", "print 1 // 0", "print 1 % 0", "print 1.5 / 0", "print 0 ** -1"] {
        assert!(matches!(runtime_failure(src), RuntimeError::DivisionByZero { line: 1 }),
                "{src}");
    }
}

#[test]
fn power_is_left_associative_and_promotes_negative_exponents() {
    assert_eq!(assert_success("print 2 ** 10, 2 ** -1, 2.0 ** 2"), "1024 0.5 4.0\n");
    assert_eq!(assert_success("print 2 ** 3 ** 2"), "64\n");
}

#[test]
fn integer_overflow_faults() {
    let err = runtime_failure("x = 9223372036854775807\nx += 1");
    assert!(matches!(err, RuntimeError::IntegerOverflow { line: 2, .. }));
}

#[test]
fn function_assignment_does_not_leak_into_globals() {
    let src = indoc! {"
        x = 1
        function f()
            x = 2
            y = 3
        end
        f()
        print x
    "};
    assert_eq!(assert_success(src), "1\n");

    let err = runtime_failure(&format!("{src}print y"));
    assert!(matches!(err, RuntimeError::UnknownVariable { ref name, line: 8 } if name == "y"));
}

#[test]
fn while_body_assignments_outlive_the_loop() {
    let src = indoc! {"
        i = 0
        while i < 3
            last = i
            i = i + 1
        end
        print last, i
    "};
    assert_eq!(assert_success(src), "2 3\n");
}

#[test]
fn for_loop_break_stops_after_second_iteration() {
    let src = indoc! {"
        count = 0
        for x in [1, 2, 3]
            count++
            if x == 2
                break
            end
        end
        print count
    "};
    assert_eq!(assert_success(src), "2\n");
}

#[test]
fn compound_assignment_in_for_body_binds_the_iteration_frame() {
    let src = indoc! {"
        total = 0
        for x in [1, 2, 3]
            total += x
        end
        print total
    "};
    assert_eq!(assert_success(src), "0\n");
}

#[test]
fn loop_variable_is_scoped_to_the_iteration() {
    let err = runtime_failure("for item in (1, 2)\nend\nprint item");
    assert!(matches!(err, RuntimeError::UnknownVariable { line: 3, .. }));
}

#[test]
fn continue_skips_to_next_iteration() {
    let src = indoc! {"
        for n in range(6)
            if n % 2 == 0
                continue
            end
            print n with end \" \"
        end
        print
    "};
    assert_eq!(assert_success(src), "1 3 5 \n");
}

#[test]
fn increment_rebinds_the_owning_frame() {
    let src = indoc! {"
        n = 0
        function bump()
            n++
        end
        bump()
        bump()
        x = 5
        y = x--
        print n, x, y
    "};
    assert_eq!(assert_success(src), "2 4 5\n");
}

#[test]
fn compound_assignment_in_function_shadows_global() {
    let src = indoc! {"
        n = 10
        function add()
            n += 1
            print n
        end
        add()
        print n
    "};
    assert_eq!(assert_success(src), "11\n10\n");
}

#[test]
fn called_functions_see_caller_frames() {
    let src = indoc! {"
        function show()
            print secret
        end
        function outer()
            secret = \"hidden\"
            show()
        end
        outer()
    "};
    assert_eq!(assert_success(src), "hidden\n");
}

#[test]
fn functions_return_values_and_none() {
    let src = indoc! {"
        function fib(n)
            if n < 2
                return n
            end
            return fib(n - 1) + fib(n - 2)
        end
        function nothing()
            return
        end
        function implicit()
            x = 1
        end
        square = fib
        print fib(15), nothing(), implicit(), square
    "};
    assert_eq!(assert_success(src), "610 none none <function fib>\n");
}

#[test]
fn functions_are_first_class() {
    let src = indoc! {"
        function apply(f, x)
            return f(x)
        end
        function double(x)
            return x * 2
        end
        print apply(double, 21), apply(len, \"four\")
    "};
    assert_eq!(assert_success(src), "42 4\n");
}

#[test]
fn call_faults() {
    let err = runtime_failure("function f(a)\nreturn a\nend\nf(1, 2)");
    assert!(matches!(err,
                     RuntimeError::ArityMismatch { found: 2, line: 4, ref function, .. } if function == "f"));

    let err = runtime_failure("x = 3\nx()");
    assert!(matches!(err, RuntimeError::NotCallable { type_name: "int", line: 2 }));

    let err = runtime_failure("undefined_function(1)");
    assert!(matches!(err, RuntimeError::UnknownVariable { line: 1, .. }));
}

#[test]
fn runaway_recursion_faults() {
    let err = on_large_stack(|| runtime_failure("function f(n)\nreturn f(n + 1)\nend\nf(0)"));
    assert!(matches!(err, RuntimeError::RecursionLimit { line: 2, .. }));
}

#[test]
fn deeply_nested_source_is_a_syntax_fault() {
    let nested = |depth: usize| format!("print {}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(on_large_stack(move || assert_success(&nested(150))), "1\n");

    let err = on_large_stack(move || syntax_failure(&nested(1000)));
    assert!(matches!(err, ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, line: 1 }));
    assert_eq!(err.to_string(),
               format!("Syntax error on line 1: Nesting deeper than {MAX_NESTING_DEPTH} levels"));

    let err = on_large_stack(|| syntax_failure(&format!("x = [{}]", "[".repeat(500))));
    assert!(matches!(err, ParseError::NestingTooDeep { line: 1, .. }));

    let err = on_large_stack(|| syntax_failure(&format!("print {}1", "- ".repeat(500))));
    assert!(matches!(err, ParseError::NestingTooDeep { line: 1, .. }));

    let blocks = format!("{}print 1\n{}", "if true\n".repeat(300), "end\n".repeat(300));
    let err = on_large_stack(move || syntax_failure(&blocks));
    assert!(matches!(err, ParseError::NestingTooDeep { .. }));
}

#[test]
fn long_operator_chains_are_bounded() {
    let sum = |terms: usize| format!("print 1{}", " + 1".repeat(terms - 1));

    assert_eq!(on_large_stack(move || assert_success(&sum(100))), "100\n");

    let err = on_large_stack(move || syntax_failure(&sum(20_000)));
    assert!(matches!(err, ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, line: 1 }));

    let calls = format!("function f()\nreturn f\nend\nf{}", "()".repeat(500));
    let err = on_large_stack(move || syntax_failure(&calls));
    assert!(matches!(err, ParseError::NestingTooDeep { line: 4, .. }));
}

#[test]
fn deep_expression_trees_fault_at_runtime() {
    fn negated(depth: usize) -> Expr {
        (0..depth).fold(Expr::Number { value: NumberLiteral::Integer(7),
                                       line:  3, },
                        |expr, _| Expr::UnaryOp { op:   UnaryOperator::Negate,
                                                  expr: Box::new(expr),
                                                  line: 3, })
    }

    on_large_stack(|| {
        let mut interpreter = Interpreter::new();
        assert_eq!(interpreter.evaluate(&negated(100)).unwrap(), Value::Integer(7));

        let err = interpreter.evaluate(&negated(MAX_EXPRESSION_DEPTH + 50)).unwrap_err();
        assert!(matches!(err,
                         RuntimeError::ExpressionTooDeep { limit: MAX_EXPRESSION_DEPTH, line: 3 }));
        assert_eq!(err.to_string(),
                   format!("Runtime error on line 3: Expression nested deeper than \
                            {MAX_EXPRESSION_DEPTH} levels"));

        assert_eq!(interpreter.evaluate(&negated(3)).unwrap(), Value::Integer(-7));
    });
}

#[test]
fn control_flow_outside_its_construct_faults() {
    assert!(matches!(runtime_failure("break"), RuntimeError::BreakOutsideLoop { line: 1 }));
    assert!(matches!(runtime_failure("x = 1\ncontinue"),
                     RuntimeError::ContinueOutsideLoop { line: 2 }));
    assert!(matches!(runtime_failure("return 5"), RuntimeError::ReturnOutsideFunction { line: 1 }));

    let src = indoc! {"
        function escape()
            break
        end
        for x in [1]
            escape()
        end
    "};
    assert!(matches!(runtime_failure(src), RuntimeError::BreakOutsideLoop { line: 2 }));
}

#[test]
fn tuple_assignment() {
    assert_eq!(assert_success("(a, b) = (1, 2)\nprint a, b"), "1 2\n");
    assert_eq!(assert_success("(a, b) = (1, 2)\n(a, b) = (b, a)\nprint a, b"), "2 1\n");

    let err = runtime_failure("(a, b) = (1, 2, 3)");
    assert!(matches!(err, RuntimeError::TupleLengthMismatch { expected: 2, found: 3, line: 1 }));

    let err = runtime_failure("(a, b) = [1, 2]");
    assert!(matches!(err, RuntimeError::TupleAssignmentType { type_name: "list", line: 1 }));
}

#[test]
fn set_compound_assignment() {
    let src = indoc! {"
        s = {1, 2}
        alias = s
        s ++= {2, 3}
        print s
        s --= {2}
        print s
        s ~~= [3, 4, 4]
        print alias
    "};
    assert_eq!(assert_success(src), "{1, 2, 3}\n{1, 3}\n{1, 4}\n");

    let err = runtime_failure("l = [1]\nl ++= {2}");
    assert!(matches!(err, RuntimeError::TypeError { line: 2, .. }));
}

#[test]
fn collections_and_indexing() {
    let src = indoc! {"
        items = [10, 20, 30]
        other = items
        items = items + [40]
        print items[0], items[-1], other, \"hello\"[1]
        m = {\"b\": 2, \"a\": [1],}
        print m, m[\"b\"], m.a, len(m)
        print (1,), (1, \"x\") + (2,), [0] * 3, \"ab\" * 2
        print {1, 1.0, 2}, {3, 1, 2,}
    "};
    assert_eq!(assert_success(src),
               indoc! {r#"
                   10 40 [10, 20, 30] e
                   {"a": [1], "b": 2} 2 [1] 2
                   (1,) (1, "x", 2) [0, 0, 0] abab
                   {1, 2} {1, 2, 3}
               "#});
}

#[test]
fn lookup_faults() {
    let err = runtime_failure("items = [1, 2, 3]\nprint items[3]");
    assert!(matches!(err, RuntimeError::IndexOutOfRange { index: 3, len: 3, line: 2 }));

    let err = runtime_failure("m = {\"a\": 1}\nprint m[\"z\"]");
    assert!(matches!(err, RuntimeError::KeyNotFound { line: 2, .. }));

    let err = runtime_failure("m = {\"a\": 1}\nprint m.z");
    assert!(matches!(err, RuntimeError::AttributeNotFound { line: 2, .. }));

    let err = runtime_failure("s = {[1]}");
    assert!(matches!(err, RuntimeError::Unhashable { type_name: "list", line: 1 }));
}

#[test]
fn logic_and_comparison() {
    assert_eq!(assert_success("print 0 or \"fallback\", 1 and 2, not 1 == 2"),
               "fallback 2 true\n");
    assert_eq!(assert_success("print 1 < 2, \"a\" < \"b\", [1, 2] < [1, 3], 1 == 1.0, 2 > 3"),
               "true true true true false\n");
    assert!(matches!(runtime_failure("print 1 < \"a\""), RuntimeError::TypeError { line: 1, .. }));
}

#[test]
fn large_integers_compare_exactly_with_floats() {
    let src = indoc! {"
        big = 9007199254740993
        near = 9007199254740992.0
        print big == near, big > near, near < big, big - 1 == near
        print len({big, near}), len({big - 1, near})
    "};
    assert_eq!(assert_success(src), "false true true true\n2 1\n");
}

#[test]
fn for_iterates_every_collection_kind() {
    let src = indoc! {"
        for c in \"abc\"
            print c with end \"\"
        end
        for k in {\"y\": 1, \"x\": 2}
            print k with end \"\"
        end
        for e in {3, 1}
            print e with end \"\"
        end
        print
    "};
    assert_eq!(assert_success(src), "abcxy13\n");

    assert!(matches!(runtime_failure("for x in 5\nend"), RuntimeError::TypeError { line: 1, .. }));
}

#[test]
fn print_separator_and_end() {
    assert_eq!(assert_success("print 1, 2, 3 with end \"!\" sep \"-\"\nprint"), "1-2-3!\n");
    assert_eq!(assert_success("print with end \"x\""), "x");
    let err = runtime_failure("print 1 with sep 2");
    assert!(matches!(err, RuntimeError::TypeError { line: 1, .. }));
}

#[test]
fn builtins() {
    assert_eq!(assert_success("print range(3), range(1, 4), range(5, 0, -2)"),
               "[0, 1, 2] [1, 2, 3] [5, 3, 1]\n");
    assert_eq!(assert_success("print len(\"abc\"), len([1, 2]), sum([1, 2.5]), min(3, 1, 2), max([4, 9])"),
               "3 2 3.5 1 9\n");
    assert_eq!(assert_success("print len"), "<builtin len>\n");
    for name in BUILTIN_FUNCTIONS {
        assert_eq!(assert_success(&format!("print {name}")), format!("<builtin {name}>\n"));
    }

    assert!(matches!(runtime_failure("range(0, 5, 0)"),
                     RuntimeError::InvalidArgument { function: "range", .. }));
    assert!(matches!(runtime_failure("max([])"),
                     RuntimeError::InvalidArgument { function: "max", .. }));
    assert!(matches!(runtime_failure("len(1, 2)"), RuntimeError::ArityMismatch { found: 2, .. }));
}

#[test]
fn registered_builtins_are_callable_and_reach_modules() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "uses_host", "value = triple(5)\n");

    let mut interpreter = Interpreter::with_config(modules_in(&dir));
    interpreter.register_builtin("triple", Arity::Exact(1), |args, line| {
                   Interpreter::apply_binary(quirk::ast::BinaryOperator::Mul,
                                             &args[0],
                                             &Value::Integer(3),
                                             line)
               });
    interpreter.run_source("import uses_host\nx = uses_host.value + triple(1)").unwrap();

    assert_eq!(interpreter.global("x"), Some(Value::Integer(18)));
    assert!(interpreter.is_module_loaded("uses_host"));
    assert_eq!(interpreter.config().search_paths, [dir.path().to_path_buf()]);
}

#[test]
fn module_is_executed_once_per_interpreter() {
    let dir = TempDir::new().unwrap();
    write_module(&dir,
                 "counter",
                 indoc! {"
                     print \"loading\"
                     value = 42
                     function double(n)
                         return n * 2
                     end
                 "});

    let src = "import counter\nimport counter\nprint counter.value, counter.double(4)";
    assert_eq!(output_with(modules_in(&dir), src).unwrap(), "loading\n42 8\n");
}

#[test]
fn module_namespace_is_isolated() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "config", "name = \"module\"\n");

    let src = indoc! {"
        name = \"main\"
        import config
        print name, config.name
    "};
    assert_eq!(output_with(modules_in(&dir), src).unwrap(), "main module\n");

    let err = output_with(modules_in(&dir), "import config\nprint config.missing").unwrap_err();
    assert!(matches!(err, Error::Runtime(RuntimeError::AttributeNotFound { line: 2, .. })));
}

#[test]
fn module_faults() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "broken", "x = (\n");
    write_module(&dir, "failing", "x = 1\ny = missing\n");
    write_module(&dir, "ping", "import pong\n");
    write_module(&dir, "pong", "import ping\n");

    let run = |src: &str| match output_with(modules_in(&dir), src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime fault, got {other:?}"),
    };

    assert!(matches!(run("x = 1\nimport nowhere"),
                     RuntimeError::ModuleNotFound { ref module, line: 2 } if module == "nowhere"));
    assert!(matches!(run("import broken"), RuntimeError::ModuleSyntax { line: 1, .. }));

    match run("import failing") {
        RuntimeError::ModuleFailed { module, source, line: 1 } => {
            assert_eq!(module, "failing");
            assert!(matches!(*source, RuntimeError::UnknownVariable { line: 2, .. }));
        },
        other => panic!("Unexpected fault: {other}"),
    }

    let err = run("import ping");
    assert!(err.to_string().contains("Circular import of module 'ping'"), "{err}");
}

#[test]
fn module_functions_resolve_names_in_the_caller() {
    let dir = TempDir::new().unwrap();
    write_module(&dir,
                 "scaling",
                 indoc! {"
                     factor = 2
                     function helper(x)
                         return x * factor
                     end
                     function scaled(x)
                         return helper(x)
                     end
                     function direct(x)
                         return x * factor
                     end
                 "});

    assert_eq!(output_with(modules_in(&dir), "import scaling\nprint scaling.helper(3)").unwrap_err()
                                                                                       .to_string(),
               "Runtime error on line 3: Undefined variable 'factor'");

    let err = output_with(modules_in(&dir), "import scaling\nprint scaling.scaled(3)").unwrap_err();
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::UnknownVariable { ref name, line: 6 })
                         if name == "helper"));

    let src = "import scaling\nfactor = 10\nprint scaling.direct(3), scaling.factor";
    assert_eq!(output_with(modules_in(&dir), src).unwrap(), "30 2\n");
}

#[test]
fn modules_load_with_a_configured_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("geo.quirk"), "function area(r)\nreturn r * r * 3\nend\n")
        .expect("write module file");
    let config = modules_in(&dir).with_extension("quirk");

    assert_eq!(config.resolve("geo"), Some(dir.path().join("geo.quirk")));
    assert_eq!(output_with(config, "import geo\nprint geo.area(2)").unwrap(), "12\n");

    let err = output_with(modules_in(&dir), "import geo").unwrap_err();
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::ModuleNotFound { ref module, line: 1 })
                         if module == "geo"));
}

#[test]
fn undefined_variable_names_variable_and_line() {
    let err = runtime_failure("x = 1\n\nprint y");
    assert!(matches!(err, RuntimeError::UnknownVariable { ref name, line: 3 } if name == "y"));
    assert_eq!(err.to_string(), "Runtime error on line 3: Undefined variable 'y'");
}

#[test]
fn syntax_faults() {
    assert!(matches!(syntax_failure("if x\nprint x"),
                     ParseError::UnterminatedBlock { block: "if", line: 1 }));
    assert!(matches!(syntax_failure("1 + 2 = 3"), ParseError::InvalidAssignmentTarget { line: 1 }));
    assert!(matches!(syntax_failure("(a, 1) = (1, 2)"),
                     ParseError::InvalidAssignmentTarget { line: 1 }));
    assert!(matches!(syntax_failure("x = $"), ParseError::UnexpectedCharacter { character: '$', line: 1 }));
    assert!(matches!(syntax_failure("print 1 with"), ParseError::UnexpectedEndOfInput { .. }
                                                   | ParseError::UnexpectedToken { .. }));
    assert!(matches!(syntax_failure("function f(a + 1)\nend"),
                     ParseError::InvalidParameter { ref function, ref parameter, line: 1 }
                         if function == "f" && parameter == "(a + 1)"));
    assert!(matches!(syntax_failure("x = 1\nfunction g(a, \"b\")\nend"),
                     ParseError::InvalidParameter { ref parameter, line: 2, .. }
                         if parameter == "\"b\""));
}

#[test]
fn printed_program_round_trips() {
    let src = indoc! {"
        function classify(n)
            if n % 2 == 0 and not n == 0
                return \"even\"
            else
                return \"odd\"
            end
        end
        (a, b) = (3, -4)
        tags = {1, 2}
        tags ++= [a]
        for i in range(a)
            print i, classify(i) with sep \":\" end \" \"
        end
        m = {\"k\": [a, b][-1]}
        while a > 0
            a--
        end
        print
        print tags, m.k, -(b) ** 2, a
    "};

    let program = parse(src).unwrap();
    let printed = program.to_string();
    let reparsed = parse(&printed).unwrap();

    assert_eq!(reparsed.to_string(), printed);
    assert_eq!(assert_success(&printed), assert_success(src));
}

#[test]
fn interpreter_state_persists_across_runs() {
    let mut interpreter = Interpreter::new();
    interpreter.run(&parse("function inc(n)\nreturn n + 1\nend\nx = 1").unwrap()).unwrap();
    interpreter.run(&parse("x = inc(x)").unwrap()).unwrap();

    assert_eq!(interpreter.global("x"), Some(Value::Integer(2)));
}

#[test]
fn output_sink_receives_module_output() {
    let dir = TempDir::new().unwrap();
    write_module(&dir, "greeter", "print \"hello from greeter\"\n");

    let output = output_with(modules_in(&dir), "import greeter").unwrap();
    assert_eq!(output, "hello from greeter\n");
}

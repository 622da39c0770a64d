use charcomb::chars::spaces1;
use charcomb::fragment::TextExt;
use charcomb::or::OrExt;
use charcomb::parser::{BoxedExt, BoxedParser};
use charcomb::text::{concat_all, exact_string};
use charcomb::{RenderOptions, execute};

fn omg_line<'code>() -> BoxedParser<'code, 'code, String> {
    concat_all(vec![exact_string("omg").text().boxed(), spaces1().boxed()]).boxed()
}

fn five_lines<'code>() -> impl charcomb::Parser<'code, Output = String> {
    concat_all((0..5).map(|_| omg_line()))
}

#[test]
fn test_points_at_offending_line() {
    let failure = execute(&five_lines(), "omg\nomg\nomg\nlol\nomg\n").unwrap_err();

    assert_eq!(
        failure.render(),
        "At line 3, column 0:\n\nlol\n^\n|\nError: expected \"omg\", saw \"lol\""
    );
}

#[test]
fn test_reports_end_of_input() {
    let failure = execute(&five_lines(), "omg\nomg\nomg\n").unwrap_err();

    assert_eq!(
        failure.render(),
        "At line 3, column 0:\n\nError: expected \"omg\", saw EOF"
    );
}

#[test]
fn test_truncates_long_excerpt() {
    let failure = execute(&five_lines(), "omg\nomg\nomg\nlololololol\nomg\n").unwrap_err();

    assert_eq!(
        failure.render(),
        "At line 3, column 0:\n\nlololololol\n^\n|\nError: expected \"omg\", saw \"lololo...\""
    );
}

#[test]
fn test_lists_every_alternative() {
    let parser = exact_string("hai").or(exact_string("lol"));
    let failure = execute(&parser, "wat").unwrap_err();

    assert_eq!(failure.expected(), ["\"hai\"", "\"lol\""]);
    assert_eq!(
        failure.to_string(),
        "At line 0, column 0:\n\nwat\n^\n|\nError: expected \"hai\" or \"lol\", saw \"wat\""
    );
}

#[test]
fn test_excerpt_width_is_configurable() {
    let failure = execute(&five_lines(), "omg\nomg\nomg\nlololololol\nomg\n").unwrap_err();
    let rendered = failure.render_with(&RenderOptions { excerpt_width: 2 });

    assert!(rendered.ends_with("saw \"lo...\""));
}

#[test]
fn test_failure_is_an_error() {
    fn parse_greeting(text: &str) -> Result<String, Box<dyn std::error::Error + '_>> {
        let greeting = execute(&exact_string("hai"), text)?;
        Ok(greeting.into_owned())
    }

    assert_eq!(parse_greeting("hai").unwrap(), "hai");
    let err = parse_greeting("lol").unwrap_err();
    assert!(err.to_string().starts_with("At line 0, column 0:"));
}

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, Report};

pub trait UnwrapPretty {
    type Output;

    fn unwrap_pretty(self) -> Self::Output;
}

impl<T, E> UnwrapPretty for Result<T, E>
where
    E: Diagnostic + Sync + Send + 'static,
{
    type Output = T;

    fn unwrap_pretty(self) -> Self::Output {
        match self {
            Ok(output) => output,
            Err(diagnostic) => {
                panic!("{:?}", Report::new(diagnostic));
            }
        }
    }
}

/// Converts a result into an option, reporting the error on stderr.
pub trait OkPretty {
    type Output;

    fn ok_pretty(self) -> Option<Self::Output>;
}

impl<T, E> OkPretty for Result<T, E>
where
    E: Diagnostic + Sync + Send + 'static,
{
    type Output = T;

    fn ok_pretty(self) -> Option<Self::Output> {
        match self {
            Ok(output) => Some(output),
            Err(diagnostic) => {
                eprintln!("{:?}", Report::new(diagnostic));
                None
            }
        }
    }
}

/// Renders a diagnostic without colors or unicode decorations.
pub fn render_plain(diagnostic: &dyn Diagnostic) -> Result<String, std::fmt::Error> {
    let mut rendered = String::new();
    GraphicalReportHandler::new_themed(GraphicalTheme::none())
        .render_report(&mut rendered, diagnostic)?;
    Ok(rendered)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use thiserror::Error;

    #[derive(Error, Debug, Diagnostic)]
    #[error("nothing to embed")]
    struct EmptyError;

    #[test]
    fn ok_pretty_keeps_success() {
        let result: Result<u8, EmptyError> = Ok(7);
        assert_eq!(result.ok_pretty(), Some(7));
    }

    #[test]
    fn ok_pretty_drops_error() {
        let result: Result<u8, EmptyError> = Err(EmptyError);
        assert_eq!(result.ok_pretty(), None);
    }

    #[test]
    #[should_panic(expected = "nothing to embed")]
    fn unwrap_pretty_panics_with_report() {
        let result: Result<u8, EmptyError> = Err(EmptyError);
        result.unwrap_pretty();
    }

    #[test]
    fn render_plain_contains_message() {
        let rendered = render_plain(&EmptyError).unwrap();
        assert!(rendered.contains("nothing to embed"), "{}", rendered);
    }
}

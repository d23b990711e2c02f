use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub trait Status {
    fn success(&self) -> bool;
    fn error_message(&self) -> &str;
}

/// Console rendering of a successful response, one entry per printed line.
pub trait Render {
    fn lines(&self) -> Vec<String>;
}

#[macro_export]
macro_rules! impl_err_response {
    ( $( $type:ty),+ $(,)? ) => {
        $(
            impl $type {
                pub fn err<S: ToString>(err: S) -> Self {
                    Self {
                        success: false,
                        err: err.to_string(),
                        ..Default::default()
                    }
                }
            }

            impl $crate::protocol::Status for $type {
                fn success(&self) -> bool {
                    self.success
                }

                fn error_message(&self) -> &str {
                    &self.err
                }
            }
        )+
    };
}

#[derive(Debug, PartialEq, Eq)]
pub enum Rendered {
    Stdout(String),
    Stderr(String),
}

pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render<T: Serialize + Status + Render>(&self, response: &T) -> Rendered {
        match self.format {
            OutputFormat::Json => match serde_json::to_string(response) {
                Ok(json) => Rendered::Stdout(json),
                Err(err) => Rendered::Stderr(format!("Failed to serialize response: {}", err)),
            },
            OutputFormat::Text if response.success() => {
                Rendered::Stdout(response.lines().join("\n"))
            }
            OutputFormat::Text => Rendered::Stderr(response.error_message().to_string()),
        }
    }

    pub fn emit<T: Serialize + Status + Render>(&self, response: &T) {
        match self.render(response) {
            Rendered::Stdout(s) if s.is_empty() => {}
            Rendered::Stdout(s) => println!("{}", s),
            Rendered::Stderr(s) => eprintln!("{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Serialize)]
    struct IdResponse {
        success: bool,
        err: String,
        id: i32,
    }

    impl Render for IdResponse {
        fn lines(&self) -> Vec<String> {
            vec![format!("ID: {}", self.id)]
        }
    }

    crate::impl_err_response! {
        IdResponse,
    }

    #[test]
    fn text_mode_splits_success_and_error_streams() {
        let output = Output::new(OutputFormat::Text);
        let ok = IdResponse {
            success: true,
            err: String::new(),
            id: 3,
        };
        assert_eq!(output.render(&ok), Rendered::Stdout("ID: 3".to_string()));
        assert_eq!(
            output.render(&IdResponse::err("boom")),
            Rendered::Stderr("boom".to_string())
        );
    }

    #[test]
    fn json_mode_serializes_whole_response() {
        let output = Output::new(OutputFormat::Json);
        assert_eq!(
            output.render(&IdResponse::err("no such doctor")),
            Rendered::Stdout(r#"{"success":false,"err":"no such doctor","id":0}"#.to_string())
        );
    }
}

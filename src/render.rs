use crate::{error::Error, metrics::Metrics};
use clap::ValueEnum;
use std::io::Write;
use tabled::{
    Table,
    settings::{Color, Style, themes::Colorization},
};

/// A removal report format.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RenderFormat {
    /// JSON.
    Json,
    /// A human-readable table.
    Text,
}

/// Renders removal metrics of a sanitization pass.
pub fn render_metrics(
    metrics: &Metrics,
    format: RenderFormat,
    writer: &mut impl Write,
) -> Result<(), Error> {
    match format {
        RenderFormat::Json => {
            serde_json::to_writer(&mut *writer, metrics)?;
            writeln!(writer)?;
        }
        RenderFormat::Text => {
            let mut table = Table::from_iter(
                [vec!["item".to_string(), "removed".to_string()]]
                    .into_iter()
                    .chain(
                        [
                            ("element", metrics.elements()),
                            ("attribute", metrics.attributes()),
                        ]
                        .into_iter()
                        .map(|(item, count)| vec![item.to_string(), count.to_string()]),
                    ),
            );

            table
                .with(Style::markdown())
                .with(Colorization::columns([Color::FG_WHITE, Color::FG_RED]));

            writeln!(writer, "{table}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_json() {
        let mut buffer = vec![];

        render_metrics(&Metrics::new(1, 2), RenderFormat::Json, &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "{\"elements\":1,\"attributes\":2}\n"
        );
    }

    #[test]
    fn render_text() {
        let mut buffer = vec![];

        render_metrics(&Metrics::new(3, 4), RenderFormat::Text, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("element"));
        assert!(text.contains('3'));
        assert!(text.contains("attribute"));
        assert!(text.contains('4'));
    }
}

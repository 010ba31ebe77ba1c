use anyhow::{Context, Result};

use crate::config::DisplayConfig;
use crate::data_provider::{Highlight, MlbDataProvider};
use crate::formatting::format_header;

pub fn format_highlights(game_pk: i64, highlights: &[Highlight], display: &DisplayConfig) -> String {
    let mut output = format_header(&format!("Game {} highlights", game_pk), true, display);

    if highlights.is_empty() {
        output.push_str("No highlights available.\n");
        return output;
    }

    for highlight in highlights {
        output.push('\n');
        output.push_str(&highlight.headline);
        output.push('\n');
        if !highlight.blurb.is_empty() && highlight.blurb != highlight.headline {
            output.push_str(&format!("  {}\n", highlight.blurb));
        }
        if let Some(url) = &highlight.url {
            output.push_str(&format!("  {}\n", url));
        }
    }
    output
}

/// Print the highlights of a finished game
pub async fn run(client: &dyn MlbDataProvider, game_pk: i64, display: &DisplayConfig) -> Result<()> {
    let highlights = client
        .highlights(game_pk)
        .await
        .with_context(|| format!("Failed to fetch highlights for game {}", game_pk))?;
    print!("{}", format_highlights(game_pk, &highlights, display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;
    use crate::fixtures::{create_mock_highlights, MOCK_FINAL_GAME};

    #[test]
    fn test_format_highlights() {
        let output = format_highlights(
            MOCK_FINAL_GAME,
            &create_mock_highlights(MOCK_FINAL_GAME),
            &DisplayConfig::default(),
        );
        let expected = "\
Game 745002 highlights
══════════════════════

Recap #745002: Orioles rally late
  A three-run eighth decides it.
  https://example.com/recap.mp4

Judge goes deep
  A 450-foot solo shot to center.
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_no_highlights() {
        let output = format_highlights(1, &[], &DisplayConfig::default());
        assert!(output.ends_with("No highlights available.\n"));
    }

    #[tokio::test]
    async fn test_run_with_mock_client() {
        let client = MockClient::new();
        assert!(run(&client, MOCK_FINAL_GAME, &DisplayConfig::default()).await.is_ok());
    }
}

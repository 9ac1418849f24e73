//! Property-based tests for mudae-stats.
//!
//! These tests generate random exports and descriptions to find edge cases.

use proptest::prelude::*;

use mudae_stats::config::{MUDAE_ID, OutputProfile, PipelineConfig};
use mudae_stats::core::{
    ExtractionStats, Field, FieldExtractor, GachaFilter, GachaRow, ShowFrequencies, process,
};
use mudae_stats::export::{Embed, EmbedAuthor, Export, Interaction, Message, User};

/// Generate a random message using fast strategies (no regex!)
fn arb_message() -> impl Strategy<Value = Message> {
    (
        prop::sample::select(vec![MUDAE_ID, "100000000000000001", ""]),
        prop::option::of(prop::sample::select(vec!["wa", "wg", "mm", ""])),
        prop::sample::select(vec!["alice", "bob", "Иван", "User,With,Commas", ""]),
        prop::collection::vec(
            prop::sample::select(vec![
                "Naruto\nClaims: #1\nLikes: #2\n**3**:kakera:".to_string(),
                "Bleach / Sennen Kessen\nLikes: #40".to_string(),
                "One Piece\n**700**:kakera:".to_string(),
                "Claims: #9".to_string(),
                String::new(),
                "   ".to_string(),
                "🎉🔥💀 emoji\n".to_string(),
            ]),
            0..3,
        ),
    )
        .prop_map(|(author_id, command, user, descriptions)| Message {
            author: User {
                id: author_id.to_string(),
                ..User::default()
            },
            interaction: command.map(|name| Interaction {
                name: name.to_string(),
                user: User {
                    name: user.to_string(),
                    ..User::default()
                },
                ..Interaction::default()
            }),
            embeds: descriptions
                .into_iter()
                .map(|description| Embed {
                    description,
                    author: EmbedAuthor {
                        name: "Someone".to_string(),
                        ..EmbedAuthor::default()
                    },
                    ..Embed::default()
                })
                .collect(),
            ..Message::default()
        })
}

/// Generate an export with up to `max_len` random messages
fn arb_export(max_len: usize) -> impl Strategy<Value = Export> {
    prop::collection::vec(arb_message(), 0..max_len).prop_map(|messages| Export {
        messages,
        ..Export::default()
    })
}

fn run(export: &Export, config: &PipelineConfig) -> (Vec<GachaRow>, ShowFrequencies) {
    let mut rows = Vec::new();
    let mut freq = ShowFrequencies::new();
    process(export, config, &mut rows, &mut freq).unwrap();
    (rows, freq)
}

proptest! {
    #[test]
    fn rows_never_exceed_eligible_messages(export in arb_export(50)) {
        let filter = GachaFilter::default();
        let eligible = filter.eligible(&export.messages).count();

        let (rows, _) = run(&export, &PipelineConfig::default());
        prop_assert_eq!(rows.len(), eligible);

        let strict = PipelineConfig::new().with_profile(OutputProfile::Strict);
        let (strict_rows, _) = run(&export, &strict);
        prop_assert!(strict_rows.len() <= eligible);
    }

    #[test]
    fn only_agent_command_responses_with_embeds_pass(msg in arb_message()) {
        let expected = msg.author.id == MUDAE_ID
            && msg.interaction_name() == Some("wa")
            && !msg.embeds.is_empty();
        prop_assert_eq!(GachaFilter::default().is_eligible(&msg), expected);
    }

    #[test]
    fn strict_rows_always_have_claim_and_kakera(export in arb_export(50)) {
        let strict = PipelineConfig::new().with_profile(OutputProfile::Strict);
        let (rows, _) = run(&export, &strict);
        for row in rows {
            prop_assert!(!row.claim_rank.is_empty());
            prop_assert!(!row.kakera_price.is_empty());
        }
    }

    #[test]
    fn frequencies_independent_of_profile(export in arb_export(50)) {
        let (_, full) = run(&export, &PipelineConfig::default());
        let strict = PipelineConfig::new().with_profile(OutputProfile::Strict);
        let (_, strict) = run(&export, &strict);
        prop_assert_eq!(full, strict);
    }

    #[test]
    fn processing_is_deterministic(export in arb_export(30)) {
        let (first, _) = run(&export, &PipelineConfig::default());
        let (second, _) = run(&export, &PipelineConfig::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn round_trip_fields(
        title in "[A-Za-z][A-Za-z0-9 :!,.'-]{0,30}[A-Za-z0-9!]",
        claims in 1u32..100_000,
        likes in 1u32..100_000,
        kakera in 1u32..100_000,
    ) {
        let description = format!("{title}\nClaims: #{claims}\nLikes: #{likes}\n**{kakera}**:kakera:");
        let extractor = FieldExtractor::new();
        let fields = extractor.extract_all(&description, &mut ExtractionStats::new());

        let claims = claims.to_string();
        let likes = likes.to_string();
        let kakera = kakera.to_string();
        prop_assert_eq!(fields.claim_rank.as_deref(), Some(claims.as_str()));
        prop_assert_eq!(fields.likes_rank.as_deref(), Some(likes.as_str()));
        prop_assert_eq!(fields.kakera_price.as_deref(), Some(kakera.as_str()));
        prop_assert_eq!(fields.show_title.as_deref(), Some(title.trim_end()));
    }

    #[test]
    fn extraction_never_panics(text in any::<String>()) {
        let extractor = FieldExtractor::new();
        for field in Field::ALL {
            if let Some(value) = extractor.extract(field, &text) {
                prop_assert!(!value.is_empty());
            }
        }
    }

    #[test]
    fn top_n_is_clamped_and_sorted(
        titles in prop::collection::vec(prop::sample::select(vec!["A", "B", "C", "D", "E"]), 0..40),
        n in 0usize..10,
    ) {
        let mut freq = ShowFrequencies::new();
        for title in &titles {
            freq.record("alice", title);
        }

        let top = freq.top_n("alice", n);
        prop_assert_eq!(top.len(), n.min(freq.distinct_shows("alice")));
        for pair in top.windows(2) {
            let ((t1, c1), (t2, c2)) = (&pair[0], &pair[1]);
            prop_assert!(c1 > c2 || (c1 == c2 && t1 < t2));
        }
        let total: u64 = freq.top_n("alice", usize::MAX).iter().map(|(_, c)| c).sum();
        prop_assert_eq!(total, titles.len() as u64);
    }
}

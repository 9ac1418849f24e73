//! Synthetic export generator for stress testing mudae-stats.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_export.json
//!
//! The channel mixes well-formed rolls with the noise a real gacha channel
//! has: user chatter, other Mudae commands, embed-less responses, rolls with
//! missing stats and optional fields of the wrong type.

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::{Value, json};
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

const MUDAE_ID: &str = "432610292342587392";

const USERS: &[&str] = &[
    "alice",
    "bob",
    "carol",
    "Иван",
    "村上",
    "User,With,Commas",
    "User\"With\"Quotes",
    "🔥FireUser🔥",
];

const SHOWS: &[(&str, &[&str])] = &[
    ("Naruto", &["Hinata Hyuga", "Sakura Haruno", "Tsunade"]),
    ("Bleach", &["Rukia Kuchiki", "Orihime Inoue", "Yoruichi Shihouin"]),
    ("One Piece", &["Nami", "Nico Robin", "Boa Hancock"]),
    ("Re:Zero, Starting Life in Another World", &["Emilia", "Rem", "Ram"]),
    ("Fullmetal Alchemist: Brotherhood", &["Winry Rockbell", "Riza Hawkeye"]),
    ("Spy x Family", &["Yor Forger", "Anya Forger"]),
];

const OTHER_COMMANDS: &[&str] = &["wg", "ha", "mm", "im", "dk"];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| "gen_export.json".to_string());

    println!("🎲 Generating {} messages into {}", count, output);

    let mut rng = rand::thread_rng();
    let base = 1_672_531_200i64; // 2023-01-01T00:00:00Z

    let messages: Vec<Value> = (0..count)
        .map(|i| {
            let ts = base + i as i64 * 180 + rng.gen_range(0..120);
            generate_message(&mut rng, i, ts)
        })
        .collect();

    let export = json!({
        "guild": {"id": "900000000000000001", "name": "Gacha Testing", "iconUrl": null},
        "channel": {
            "id": "900000000000000002",
            "type": "GuildTextChat",
            "categoryId": "900000000000000003",
            "category": "games",
            "name": "mudae",
            "topic": null
        },
        "dateRange": {"after": null, "before": null},
        "exportedAt": "2024-01-01T00:00:00+00:00",
        "messages": messages,
        "messageCount": count
    });

    let file = File::create(&output).expect("Failed to create output file");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &export).expect("Failed to write export");
    writer.flush().expect("Failed to flush");

    println!("✅ Done!");
}

fn generate_message(rng: &mut impl Rng, i: usize, ts: i64) -> Value {
    let timestamp = chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string())
        .unwrap_or_default();
    let user = *USERS.choose(rng).unwrap();

    match rng.gen_range(0..100) {
        // Plain chatter
        0..=24 => json!({
            "id": (1_000_000 + i).to_string(),
            "type": "Default",
            "timestamp": timestamp,
            "content": "$wa",
            "author": {"id": "100000000000000001", "name": user, "isBot": false},
            "embeds": [],
        }),
        // Mudae answering a different command
        25..=34 => json!({
            "id": (1_000_000 + i).to_string(),
            "type": "ChatInputCommand",
            "timestamp": timestamp,
            "author": {"id": MUDAE_ID, "name": "Mudae", "isBot": true},
            "embeds": [{"description": roll_description(rng, true)}],
            "interaction": {"id": i.to_string(), "name": *OTHER_COMMANDS.choose(rng).unwrap(), "user": {"name": user}},
        }),
        // /wa response without an embed
        35..=39 => json!({
            "id": (1_000_000 + i).to_string(),
            "type": "ChatInputCommand",
            "timestamp": timestamp,
            "content": "You have no rolls left.",
            "author": {"id": MUDAE_ID, "name": "Mudae", "isBot": true},
            "embeds": null,
            "interaction": {"id": i.to_string(), "name": "wa", "user": {"name": user}},
        }),
        // A real roll, sometimes with stats missing or odd types
        _ => {
            let (show, wives) = SHOWS.choose(rng).unwrap();
            let complete = rng.gen_bool(0.8);
            json!({
                "id": (1_000_000 + i).to_string(),
                "type": "ChatInputCommand",
                "timestamp": if rng.gen_bool(0.01) { Value::Null } else { json!(timestamp) },
                "timestampEdited": if rng.gen_bool(0.5) { Value::Null } else { json!(42) },
                "author": {"id": MUDAE_ID, "name": "Mudae", "isBot": true, "color": null},
                "embeds": [{
                    "title": "",
                    "url": null,
                    "timestamp": null,
                    "description": format!("{}\n{}", show, roll_description(rng, complete)),
                    "color": "#FF9C2C",
                    "author": {"name": *wives.choose(rng).unwrap(), "url": null},
                    "image": {"url": "https://mudae.net/uploads/roll.png", "width": 225, "height": 350},
                }],
                "interaction": {"id": i.to_string(), "name": "wa", "user": {"id": "100000000000000001", "name": user}},
            })
        }
    }
}

fn roll_description(rng: &mut impl Rng, complete: bool) -> String {
    let mut lines = Vec::new();
    if complete || rng.gen_bool(0.5) {
        lines.push(format!("Claims: #{}", rng.gen_range(1..30_000)));
    }
    if complete || rng.gen_bool(0.5) {
        lines.push(format!("Likes: #{}", rng.gen_range(1..30_000)));
    }
    if complete || rng.gen_bool(0.5) {
        lines.push(format!("**{}**:kakera:", rng.gen_range(30..2_000)));
    }
    lines.shuffle(rng);
    lines.join("\n")
}

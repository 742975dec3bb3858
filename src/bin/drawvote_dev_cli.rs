// src/bin/drawvote_dev_cli.rs
//
// Прогон одной партии от создания до подсчёта голосов.
//
// Запуск:
//   cargo run --bin drawvote_dev_cli -- [seed] [config.json]
//
// Логи управляются через RUST_LOG (по умолчанию info).

use std::sync::Arc;

use tokio::sync::mpsc::Receiver;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use drawvote_engine::api::{execute, Command, CommandResponse};
use drawvote_engine::domain::{Coord, GameStage, Stroke};
use drawvote_engine::{
    ChannelSubscriber, DeterministicRng, EngineConfig, GameSnapshot, SessionRegistry,
    SubscriberRegistry,
};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn load_config(path: Option<&str>) -> EngineConfig {
    let Some(path) = path else {
        return EngineConfig::default();
    };
    match std::fs::read_to_string(path) {
        Ok(raw) => match EngineConfig::from_json_str(&raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                eprintln!("Конфиг {path} не принят: {err}");
                std::process::exit(2);
            }
        },
        Err(err) => {
            eprintln!("Не удалось прочитать {path}: {err}");
            std::process::exit(2);
        }
    }
}

/// Диагональный штрих игрока на его "ходу" — просто чтобы было что рисовать.
fn stroke_for(turn: usize) -> Stroke {
    let base = (turn as i32) * 10;
    (0..5).map(|i| Coord::new(base + i, base + i * 2)).collect()
}

fn drain(name: &str, rx: &mut Receiver<Arc<GameSnapshot>>) {
    let mut count = 0;
    let mut last_stage = None;
    while let Ok(snapshot) = rx.try_recv() {
        count += 1;
        last_stage = Some(snapshot.stage);
    }
    println!("  {name}: получено снапшотов {count}, последняя стадия {last_stage:?}");
}

fn main() {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let config = load_config(args.next().as_deref());
    let buffer = config.subscriber_buffer;

    println!("=== DRAWVOTE DEV CLI (seed={seed}) ===\n");

    let hub = Arc::new(SubscriberRegistry::new());
    let registry = match SessionRegistry::new(config, DeterministicRng::from_seed(seed), hub.clone()) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("Конфиг не принят: {err}");
            std::process::exit(2);
        }
    };

    let names = ["alice", "bob", "carol"];
    let mut inboxes = Vec::new();

    // Владелец создаёт партию, остальные входят.
    let (sub, rx) = ChannelSubscriber::new(0, buffer);
    inboxes.push((names[0], rx));
    let game_id = match execute(
        &registry,
        Command::NewGame {
            player_name: names[0].to_string(),
        },
        Some(Arc::new(sub)),
    ) {
        Ok(CommandResponse::Game(snapshot)) => snapshot.id,
        other => {
            eprintln!("Не удалось создать партию: {other:?}");
            std::process::exit(1);
        }
    };
    println!("Создана партия id={game_id}");

    for (idx, name) in names.iter().enumerate().skip(1) {
        let (sub, rx) = ChannelSubscriber::new(idx as u64, buffer);
        inboxes.push((*name, rx));
        let cmd = Command::JoinGame {
            game_id,
            player_name: name.to_string(),
        };
        if let Err(err) = execute(&registry, cmd, Some(Arc::new(sub))) {
            eprintln!("{name} не смог войти: {err}");
        }
    }

    // Не владелец пытается стартовать — должна быть ошибка.
    if let Err(err) = registry.start_game(game_id, names[1]) {
        println!("Ожидаемая ошибка: {err}");
    }
    if let Err(err) = registry.start_game(game_id, names[0]) {
        eprintln!("Старт не удался: {err}");
        std::process::exit(1);
    }

    if let Some(snapshot) = registry.snapshot(game_id) {
        println!("Порядок ходов: {:?}", snapshot.turn_order);
    }

    // Рисуем, пока движок не переведёт партию в голосование.
    let mut turn = 0;
    while let Some(current) = registry.current_turn(game_id) {
        if let Err(err) = registry.draw_stroke(game_id, &current, stroke_for(turn)) {
            eprintln!("Штрих {current} отклонён: {err}");
            break;
        }
        println!("  ход {turn}: рисует {current}");
        turn += 1;
    }

    // Каждый голосует против следующего по кругу.
    for (idx, name) in names.iter().enumerate() {
        let against = names[(idx + 1) % names.len()];
        if let Err(err) = registry.vote_against(game_id, name, against) {
            eprintln!("Голос {name} отклонён: {err}");
        }
    }

    match registry.snapshot(game_id) {
        Some(snapshot) if snapshot.stage == GameStage::Over => {
            println!("\nПартия завершена, штрихов: {}", snapshot.strokes.len());
            for (name, p) in &snapshot.players {
                println!(
                    "  {name:<6} цвет={:<10} голосов={} голосовал против={}",
                    p.color, p.votes, p.voted_against
                );
            }
        }
        Some(snapshot) => println!("\nПартия не завершена, стадия {}", snapshot.stage),
        None => println!("\nПартия {game_id} пропала из реестра"),
    }

    println!("\nДоставка снапшотов:");
    for (name, rx) in inboxes.iter_mut() {
        drain(*name, rx);
    }
    println!("Подписчиков в партии: {}", hub.subscriber_count(game_id));
}

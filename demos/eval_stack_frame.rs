use cardstack::{Evaluator, ScrollPhase, StackConfig, Viewport};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let cfg = StackConfig::default();
    cfg.validate()?;
    let viewport = Viewport::new(430.0, 932.0)?;

    // Sweep one card through the scroll region while its neighbours rest;
    // roughly what the scroll container reports mid-drag.
    let mut phases = vec![ScrollPhase::Identity.value(); cfg.total_cards as usize];
    phases[0] = -1.0;
    phases[1] = -0.35;
    phases[2] = 0.6;

    let stack = Evaluator::eval_stack(&cfg, viewport, &phases)?;
    println!("{}", serde_json::to_string_pretty(&stack)?);
    Ok(())
}

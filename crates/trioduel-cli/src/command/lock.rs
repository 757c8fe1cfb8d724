use trioduel_engine::Side;

use crate::command::SessionArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct LockArg {
    #[clap(flatten)]
    session: SessionArg,
    /// Team side: a or b
    #[arg(long)]
    side: Side,
    /// Slot index (0-2)
    #[arg(long)]
    slot: usize,
}

pub(crate) fn run(arg: &LockArg) -> anyhow::Result<()> {
    let mut session = arg.session.load()?;
    let Some(locked) = session.toggle_lock(arg.side, arg.slot) else {
        eprintln!(
            "Team {} has no slot {}, nothing to toggle",
            arg.side, arg.slot
        );
        return Ok(());
    };
    arg.session.save(&session)?;

    let id = &session.slots(arg.side)[arg.slot].id;
    let state = if locked { "locked" } else { "unlocked" };
    eprintln!("Team {} slot {} ({id}) {state}", arg.side, arg.slot);
    Ok(())
}

use crate::ProgressKind;
use anyhow::Result;
use clt::{Config, LoadingStyle, Progress};
use std::thread;
use std::time::Duration;

/// Updates sent to a bar over the simulated work
const BAR_STEPS: u32 = 50;
/// Steps of the incremental demo and the workers sharing them
const INCREMENTAL_STEPS: usize = 10;
const WORKERS: usize = 3;
/// Loading messages stay hidden for fast work
const LOADING_DELAY: Duration = Duration::from_millis(100);

pub fn progress(config: &Config, kind: ProgressKind, fail: bool, millis: u64) -> Result<()> {
    let work = Duration::from_millis(millis);
    match kind {
        ProgressKind::Spinner => {
            let label = if fail {
                "Testing a failed result"
            } else {
                "Testing a successful result"
            };
            let mut p = Progress::spinner(label).with_config(&config.progress);
            p.start();
            thread::sleep(work);
            finish(&mut p, fail);
        }
        ProgressKind::Bar => {
            let mut p = Progress::bar("Implement progress bar").with_config(&config.progress);
            p.start();
            // a failing run gives up at 40%
            let steps = if fail { BAR_STEPS * 2 / 5 } else { BAR_STEPS };
            for i in 0..steps {
                p.update(f64::from(i) / f64::from(BAR_STEPS));
                thread::sleep(work / BAR_STEPS);
            }
            finish(&mut p, fail);
        }
        ProgressKind::Loading => {
            let mut p = Progress::loading("Loading...", LoadingStyle::Dots, LOADING_DELAY)
                .with_config(&config.progress);
            p.start();
            thread::sleep(work);
            finish(&mut p, fail);
        }
        ProgressKind::Incremental => incremental(config, fail, work),
    }
    Ok(())
}

/// Several workers share one bar and each bumps it as it finishes a step.
fn incremental(config: &Config, fail: bool, work: Duration) {
    let mut p =
        Progress::incremental_bar(INCREMENTAL_STEPS, "Doing work").with_config(&config.progress);
    p.start();
    let Some(handle) = p.handle() else {
        return;
    };

    let per_step = work / INCREMENTAL_STEPS as u32;
    thread::scope(|scope| {
        for worker in 0..WORKERS {
            let handle = handle.clone();
            scope.spawn(move || {
                for _ in (0..INCREMENTAL_STEPS).filter(|step| step % WORKERS == worker) {
                    thread::sleep(per_step * WORKERS as u32);
                    handle.increment();
                }
            });
        }
    });
    drop(handle);
    finish(&mut p, fail);
}

fn finish(progress: &mut Progress, fail: bool) {
    if fail {
        progress.fail();
    } else {
        progress.success();
    }
}

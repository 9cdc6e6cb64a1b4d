use std::error::Error;
use std::str::FromStr;

use avl_store::AvlTree;
use log::{LevelFilter, info};

/// Environment variable holding the log level (`info` if unset).
const LOG_LEVEL_VAR: &str = "AVL_DEMO_LOG";

fn initialize_logging() -> Result<(), Box<dyn Error>> {
    use simplelog::*;

    let level = match std::env::var(LOG_LEVEL_VAR) {
        Ok(level) => LevelFilter::from_str(&level)
            .map_err(|_| format!("invalid {LOG_LEVEL_VAR} value {level:?}"))?,
        Err(std::env::VarError::NotPresent) => LevelFilter::Info,
        Err(e) => return Err(e.into()),
    };

    CombinedLogger::init(
        vec![
            TermLogger::new(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
        ]
    )?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logging()?;

    let mut tree = AvlTree::new();

    info!("Test 1: insert 3, 4, 5, 6");
    tree.extend([3, 4, 5, 6]);
    info!("after insertions: {tree}");

    info!("Test 2: delete leaf 6");
    tree.delete(&6);
    info!("after deleting 6: {tree}");

    info!("Test 3: delete 4 (two children)");
    tree.delete(&4);
    info!("after deleting 4: {tree}");

    info!("Test 4: insert 2, 1 (left-left rotation)");
    tree.extend([2, 1]);
    info!("after rotation: {tree}");

    info!("Test 5: insert 7, 8 (right-right rotation)");
    tree.extend([7, 8]);
    info!("after rotation: {tree}");

    info!("Test 6: delete 3 (two children)");
    tree.delete(&3);
    info!("after deleting 3: {tree}");

    info!("Test 7: insert 10, 20, 30, 25");
    tree.extend([10, 20, 30, 25]);
    info!("final tree: {tree}");

    println!("{}", tree.serialize());
    Ok(())
}

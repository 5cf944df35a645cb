use argh::FromArgs;
use pathsh::search::DEFAULT_SEARCH_LIMIT;
use pathsh::Session;

#[derive(FromArgs)]
/// Interactive shell with inline path search: `<name` resolves the closest
/// ancestor directory containing `name`, `>pattern` resolves the first file
/// below the current directory whose relative path ends with `pattern`.
struct Options {
    /// maximum number of filesystem entries examined by one downward search
    #[argh(option, default = "DEFAULT_SEARCH_LIMIT")]
    limit: usize,
}

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();
    let mut session = Session::new(options.limit)?;

    // Directory history navigation, bound as ordinary registered commands.
    // Revisiting an entry must not append to the history, hence record=false.
    session.register("bk", |state, _args| {
        let prev = state.history.back()?;
        state.change_dir(&prev, false)?;
        println!("navigated back to {}", prev.display());
        Ok(())
    });
    session.register("fw", |state, _args| {
        let next = state.history.forward()?;
        state.change_dir(&next, false)?;
        println!("navigated forward to {}", next.display());
        Ok(())
    });

    session.run()
}

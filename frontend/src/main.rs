use common::{messages::Snapshot, RawMove};
use gloo::console::log;
use gloo::dialogs::alert;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod api;
mod board;

use board::{BoardComponent, MoveForm};

#[function_component(App)]
fn app() -> Html {
    let snapshot = use_state(|| None::<Snapshot>);

    // Every action ends by fetching the board again
    let refresh = {
        let snapshot = snapshot.clone();
        Callback::from(move |_: ()| {
            let snapshot = snapshot.clone();
            spawn_local(async move {
                match api::get_board().await {
                    Ok(board) => snapshot.set(Some(board)),
                    Err(err) => log!(err.to_string()),
                }
            });
        })
    };
    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |_| {
                refresh.emit(());
                || ()
            },
            (),
        );
    }

    let on_move = {
        let refresh = refresh.clone();
        Callback::from(move |raw_move: RawMove| {
            log!(format!("Move: {:?}", raw_move));
            let refresh = refresh.clone();
            spawn_local(async move {
                if let Err(err) = api::make_move(raw_move).await {
                    alert(&format!("Error: {}", err));
                }
                refresh.emit(());
            });
        })
    };

    let on_restart = {
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let refresh = refresh.clone();
            spawn_local(async move {
                if let Err(err) = api::restart_game().await {
                    alert(&format!("Error: {}", err));
                }
                refresh.emit(());
            });
        })
    };

    html! {
        <>
            <h1>{"Checkers"}</h1>
            {
                match &*snapshot {
                    None => html! { "Loading..." },
                    Some(snapshot) if snapshot.state.is_over() => html! {
                        <>
                            <h2>{"Game finished"}</h2>
                            <p>{format!("Winner: {}", snapshot.state.player())}</p>
                            <form onsubmit={on_restart}>
                                <button type="submit">{"Play again"}</button>
                            </form>
                        </>
                    },
                    Some(snapshot) => html! {
                        <>
                            <h2>{format!("Game Status: Player {} move", snapshot.state.player())}</h2>
                            <BoardComponent snapshot={snapshot.clone()} />
                            <br />
                            <br />
                            <MoveForm onsubmit={on_move} />
                        </>
                    },
                }
            }
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

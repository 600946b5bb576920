use common::{messages::Snapshot, Player, RawMove};
use gloo::dialogs::alert;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BoardProps {
    pub snapshot: Snapshot,
}

#[derive(Properties, PartialEq)]
pub struct MoveFormProps {
    pub onsubmit: Callback<RawMove>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum GridItem {
    RowLabel(usize),
    Cell(usize, usize),
    Corner,
    ColumnLabel(usize),
}

// Rows are drawn from the last row down so White moves up the screen, the
// same way the terminal prints the board. Each row starts with its 1-indexed
// number and a footer row carries the column numbers, matching the move form.
fn grid_layout(dimension: usize) -> Vec<GridItem> {
    (0..dimension)
        .rev()
        .flat_map(|row| {
            std::iter::once(GridItem::RowLabel(row))
                .chain((0..dimension).map(move |col| GridItem::Cell(row, col)))
        })
        .chain(std::iter::once(GridItem::Corner))
        .chain((0..dimension).map(GridItem::ColumnLabel))
        .collect()
}

#[function_component(BoardComponent)]
pub fn board(props: &BoardProps) -> Html {
    let dimension = props.snapshot.dimension;
    html! {
        <div
            class={classes!("board-grid")}
            style={format!("grid-template-rows: repeat({0}, 1fr); grid-template-columns: repeat({0}, 1fr)", dimension + 1)}>
            {
                grid_layout(dimension)
                    .into_iter()
                    .map(|item| match item {
                        GridItem::RowLabel(row) => label(row + 1),
                        GridItem::Cell(row, col) => {
                            board_cell(row, col, props.snapshot.cell(row, col).unwrap_or(Player::Empty))
                        }
                        GridItem::Corner => html! { <div class={classes!("label")} /> },
                        GridItem::ColumnLabel(col) => label(col + 1),
                    })
                    .collect::<Html>()
            }
        </div>
    }
}

fn label(number: usize) -> Html {
    html! { <div class={classes!("label")}>{number}</div> }
}

fn board_cell(row: usize, col: usize, player: Player) -> Html {
    let shade = if (row + col) % 2 == 0 { "dark" } else { "light" };
    let symbol = match player {
        Player::White => "○",
        Player::Black => "●",
        Player::Empty => "",
    };
    html! {
        <div
            class={classes!("cell", shade)}
            title={format!("row {}, column {}", row + 1, col + 1)}>
            {symbol}
        </div>
    }
}

#[function_component(MoveForm)]
pub fn move_form(props: &MoveFormProps) -> Html {
    let fields = use_state(|| [String::new(), String::new(), String::new(), String::new()]);
    let oninput = |idx: usize| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*fields).clone();
            next[idx] = e.target_unchecked_into::<HtmlInputElement>().value();
            fields.set(next);
        })
    };
    let onsubmit = {
        let fields = fields.clone();
        let callback = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match to_raw_move(&fields) {
                Some(raw_move) => callback.emit(raw_move),
                None => alert("Invalid input - rows and columns are whole numbers starting at 1"),
            }
        })
    };
    html! {
        <form class={classes!("move-form")} {onsubmit}>
            <label>{"From row "}<input type="number" min="1" value={fields[0].clone()} oninput={oninput(0)} /></label>
            <label>{"From column "}<input type="number" min="1" value={fields[1].clone()} oninput={oninput(1)} /></label>
            <br />
            <label>{"To row "}<input type="number" min="1" value={fields[2].clone()} oninput={oninput(2)} /></label>
            <label>{"To column "}<input type="number" min="1" value={fields[3].clone()} oninput={oninput(3)} /></label>
            <br />
            <button type="submit">{"Move"}</button>
        </form>
    }
}

// The form is 1-indexed, the server is not
fn to_raw_move(fields: &[String; 4]) -> Option<RawMove> {
    let mut coords = [0usize; 4];
    for (coord, field) in coords.iter_mut().zip(fields) {
        *coord = field.trim().parse::<usize>().ok()?.checked_sub(1)?;
    }
    Some(RawMove::new((coords[0], coords[1]), (coords[2], coords[3])))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: [&str; 4]) -> [String; 4] {
        values.map(|v| v.to_string())
    }

    #[test]
    fn test_to_raw_move() {
        assert_eq!(
            to_raw_move(&fields(["1", "2", "2", "3"])),
            Some(RawMove::new((0, 1), (1, 2)))
        );
        assert_eq!(
            to_raw_move(&fields([" 4", "4 ", "3", "3"])),
            Some(RawMove::new((3, 3), (2, 2)))
        );
        assert_eq!(to_raw_move(&fields(["0", "1", "2", "1"])), None);
        assert_eq!(to_raw_move(&fields(["", "1", "2", "1"])), None);
        assert_eq!(to_raw_move(&fields(["-1", "1", "2", "1"])), None);
    }

    #[test]
    fn test_grid_layout() {
        use GridItem::*;
        assert_eq!(
            grid_layout(2),
            vec![
                RowLabel(1),
                Cell(1, 0),
                Cell(1, 1),
                RowLabel(0),
                Cell(0, 0),
                Cell(0, 1),
                Corner,
                ColumnLabel(0),
                ColumnLabel(1),
            ]
        );
        assert_eq!(grid_layout(8).len(), 9 * 9);
    }
}

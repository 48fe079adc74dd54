//! Headless walk through one click on two overlapping controls.
//!
//! Prints every event of each tick and the recorded draw calls.

use overlaykit::{
    Arbiter, Color, Control, ControlTree, DrawList, Grid, InputFrame, Panel, Style, Track,
};

fn main() {
    let mut tree = ControlTree::new();
    let root = tree.insert(
        Control::grid(
            Panel,
            Grid::new()
                .with_columns([Track::pixel(40.0), Track::star(1.0)])
                .with_rows([Track::star(1.0)]),
        )
        .size(120.0, 60.0),
    );
    let back = tree
        .add(
            root,
            Control::leaf(Panel)
                .cell(0, 0)
                .span(2, 1)
                .focusable(true)
                .style(Style::new().background(Color::rgb(200, 40, 40))),
        )
        .expect("root is a grid");
    let front = tree
        .add(
            root,
            Control::leaf(Panel)
                .cell(1, 0)
                .focusable(true)
                .style(Style::new().background(Color::rgb(40, 40, 200))),
        )
        .expect("root is a grid");

    tree.layout(root).expect("root is live");
    println!("back  = {:?} {:?}", back, tree.bounds(back));
    println!("front = {:?} {:?}", front, tree.bounds(front));

    let mut arbiter = Arbiter::new();
    let ticks = [
        ("hover", InputFrame::at(60.0, 30.0)),
        ("press", InputFrame::at(60.0, 30.0).down(true)),
        ("release", InputFrame::at(60.0, 30.0)),
    ];
    for (name, frame) in ticks {
        println!("-- {name}");
        for event in tree.update(root, &frame, &mut arbiter).expect("root is live") {
            println!("   {:?}", event);
        }
    }
    println!("focused = {:?}", arbiter.focused());

    let mut list = DrawList::new();
    tree.paint(root, &arbiter, &mut list).expect("root is live");
    for command in list.commands() {
        println!("{:?}", command);
    }
}

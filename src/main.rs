use anyhow::Result;
use rookery_core::{Board, Coord, Piece, destinations};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut board = Board::standard();
    let origin = Coord::new(3, 3);
    board.place(origin, Piece::WHITE_ROOK);
    board.place(Coord::new(3, 6), Piece::BLACK_KNIGHT);
    board.place(Coord::new(5, 3), Piece::WHITE_BISHOP);

    let moves = destinations(&board, origin)?;
    info!("rook on {origin} has {} destinations", moves.len());
    for dest in &moves {
        info!("  {dest}");
    }
    Ok(())
}

pub mod d400_front_desk;

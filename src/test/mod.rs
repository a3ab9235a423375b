
mod test_solve;
mod test_win;

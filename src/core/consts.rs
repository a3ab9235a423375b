/// Separates rows in a level string.
pub const LEVEL_ROW_DELIMITER: char = '!';

/// The beanstalk maze: `#` wall, `-` floor, `0` player, `2` shovel, `3` bean,
/// `4` fertilizer, `5` water, `7` goal, `x` filler outside the maze.
pub const LEVEL: &str = concat!(
    "xxxxxxxxxxxxxxxxxxxx!",
    "xxxxxx####xxxxxxxxxx!",
    "xxxxx##--#xxxxxxxxxx!",
    "xxxxx#---#xxxxxxxxxx!",
    "xxx###--5##xxxxxxxxx!",
    "xxx#--3-4-#xxxxxxxxx!",
    "xxx#-#-##-#xxx#####x!",
    "xxx#-#-##-#####---#x!",
    "xxx#--2---------7-#x!",
    "xxx###-###-#0##---#x!",
    "xxxxx#-----########x!",
    "xxxxx#######xxxxxxxx!",
    "xxxxxxxxxxxxxxxxxxxx!",
    "xxxxxxxxxxxxxxxxxxxx",
);

/// Upper bound on distinct states the solver will expand before giving up.
pub const DEFAULT_MAX_STATES: usize = 200_000;

/// All user-facing console strings in one place
pub struct UiText {
    pub app_title: &'static str,
    pub usage_seasonal: &'static str,
    pub usage_general: &'static str,
    pub usage_time_slot: &'static str,

    pub menu_header: &'static str,
    pub menu_summary: &'static str,
    pub menu_judge: &'static str,
    pub menu_exit: &'static str,
    pub menu_prompt: &'static str,
    pub menu_invalid: &'static str,
    pub summary_done: &'static str,
    pub goodbye: &'static str,

    pub judge_header: &'static str,
    pub judge_again: &'static str,
    pub judge_leave: &'static str,
    pub result_header: &'static str,
    pub separator: &'static str,

    pub departure_prompt: &'static str,
    pub departure_invalid: &'static str,
    pub arrival_auto: &'static str,
    pub date_prompt: &'static str,
    pub date_invalid: &'static str,
    pub time_prompt: &'static str,
    pub time_invalid: &'static str,
    pub season_prompt: &'static str,
    pub season_invalid: &'static str,
    pub price_prompt: &'static str,
    pub price_not_positive: &'static str,
    pub price_not_integer: &'static str,

    pub insufficient_sample: &'static str,
    pub empty_sample: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Welcome to Fare Sniper: Taiwan-Japan airfare judge",
    usage_seasonal: "  1. If you know whether you fly in peak or off-peak season, fares are compared within that season and time slot.",
    usage_general: "  2. If you are not sure, fares are compared against the overall distribution for the direction and time slot.",
    usage_time_slot: "  3. Departure times are bucketed into morning / noon / evening flights automatically.",

    menu_header: "Choose an option:",
    menu_summary: "  1. Price distribution summary",
    menu_judge: "  2. Judge a fare",
    menu_exit: "  3. Exit",
    menu_prompt: "Enter option number (1 / 2 / 3): ",
    menu_invalid: "Invalid option, please enter 1, 2 or 3.",
    summary_done: "Press Enter to return to the main menu.",
    goodbye: "Thanks for using Fare Sniper!",

    judge_header: "[Fare judgement]",
    judge_again: "Judge another fare? (y/n): ",
    judge_leave: "Leaving fare judgement, back to the main menu.",
    result_header: "[Result]",
    separator: "————————————————",

    departure_prompt: "Departure airport (TPE / NRT): ",
    departure_invalid: "Only TPE or NRT are supported as departure, please try again.",
    arrival_auto: "Arrival set automatically to",
    date_prompt: "Flight date (YYYY/MM/DD, e.g. 2026/01/03): ",
    date_invalid: "Invalid date, please use YYYY/MM/DD, e.g. 2026/01/03.",
    time_prompt: "Departure time (24-hour HH:MM, e.g. 08:30): ",
    time_invalid: "Cannot place that time in morning (06-09), noon (10-14) or evening (15-20); please enter HH:MM again.",
    season_prompt: "Season (peak / off-peak / unknown, or 旺 / 淡 / 不知道): ",
    season_invalid: "Unrecognised season, please enter peak, off-peak or unknown.",
    price_prompt: "Quoted fare (TWD): ",
    price_not_positive: "The fare must be greater than zero, please try again.",
    price_not_integer: "The fare must be a whole number, please try again.",

    insufficient_sample: "No historical fares for this direction / season / time slot combination, so this fare cannot be judged yet.",
    empty_sample: "The historical sample is empty; nothing to summarise.",
};

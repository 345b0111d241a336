pub struct UiText {
    // --- Menu ---
    pub welcome: &'static str,
    pub menu: &'static str,
    pub prompt_selection: &'static str,
    pub invalid_request: &'static str,

    // --- Trial count prompt ---
    pub prompt_trials: &'static str,
    pub invalid_trials: &'static str,

    // --- Theoretical report ---
    pub label_win_event: &'static str,
    pub label_win_event_size: &'static str,
    pub label_probability: &'static str,

    // --- Simulation report ---
    pub label_running: &'static str,
    pub label_stay: &'static str,
    pub label_switch: &'static str,
    pub label_deviation: &'static str,
    pub label_interval: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    welcome: "Welcome to Monte Hall Game Fun",
    menu: "
     1 For theoretical Result
     2 For Monte Carlo simulation
     3 Display Event Space Tuples with Probabilities
     ",
    prompt_selection: "Enter selection: ",
    invalid_request: "Invalid request",

    prompt_trials: "How many times do you want to run simulation?  (default is 100,000)",
    invalid_trials: "Invalid selection try again",

    label_win_event: "win event =",
    label_win_event_size: "size win event =",
    label_probability: "Probability of winning =",

    label_running: "Running simulation",
    label_stay: "Strategy where you stay with Original Door: You won",
    label_switch: "Strategy where you Switch doors: You won",
    label_deviation: "Switch differs from theoretical 2/3 (5 decimals)",
    label_interval: "Switch 95% interval",
};

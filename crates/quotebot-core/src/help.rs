/// Instructional reply returned for `[prefix]help`.
///
/// Pure text with the live prefix interpolated; no provider request is
/// involved.
pub fn help_text(prefix: &str) -> String {
    format!(
        "To use the stock bot, all requests must be sent in the form:\n\
         [prefix][stock-chosen] [command-chosen] [date-time-chosen]\n\
         \n\
         The current prefix is {prefix}\n\
         After the prefix comes the stock code: for example, Microsoft would be MSFT, \
         and Tesla would be TSLA. Capitals not necessary.\n\
         Then comes the command. Here, you have 3 choices: t for time, d for day, and m for month.\n\
         \n\
         The last part, the date-time-chosen, depends on the command.\n\
         If you chose the time command, enter a time in hh:mm format, and the stock value \
         at that time on the most recent day will be returned.\n\
         If you chose the day command, enter a date in yyyy-mm-dd format.\n\
         If you chose the month command, enter a month in yyyy-mm format.\n\
         Shortcut: entering the date-time value as \"now\" returns the latest minute / day / month data.\n\
         \n\
         For any command, the data returned is as follows:\n\
         Open: the stock value at the start of the minute / day / month\n\
         Close: the stock value at the end of the minute / day / month\n\
         Difference: the change from open to close\n\
         High / Low: the peak and valley of the minute / day / month\n\
         Range: the distance from the high to the low\n\
         Volume: the amount of stocks traded during the minute / day / month\n\
         Change: the change, in USD and %, of the stock price from the previous close\n\
         \n\
         Note that this bot cannot retrieve after-hours data. If the requested date or \
         time is unavailable, it is because the market was closed. Remember that the \
         market closes on weekends.\n\
         It could also be that the requested data is too far back. Anything over 20 years \
         back is not stored."
    )
}

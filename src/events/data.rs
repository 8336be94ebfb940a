//! Built-in event tables for the 36 topics.
//!
//! Static game data: each topic carries a small pool of events with a
//! base cash impact and teaching annotations. Impacts on ordinary
//! topics are pre-leverage; impacts on the four special topics apply
//! as-is.

use super::catalog::EventCatalog;
use super::record::EventRecord;
use crate::board::TopicId;

fn ev(
    text: &str,
    impact: f64,
    learn: &str,
    advice: &str,
    kind: &str,
    face: &str,
    mind: &str,
) -> EventRecord {
    EventRecord::new(text, impact)
        .with_learn(learn)
        .with_advice(advice)
        .with_kind(kind)
        .with_face(face)
        .with_mind(mind)
}

/// Build the full built-in catalog.
pub(super) fn builtin() -> EventCatalog {
    let mut cat = EventCatalog::new();
    let mut add = |idx: u8, record: EventRecord| cat.register(TopicId::new(idx), record);

    // 0: Starting Line (special)
    add(0, ev(
        "Payday: your salary lands in the account.",
        5.0,
        "Regular income is the engine of every investing plan.",
        "Pay yourself first; invest before you spend.",
        "income",
        "Treat the deposit as capital, not pocket money.",
        "Slow and steady funds the whole journey.",
    ));
    add(0, ev(
        "Year-end bonus arrives.",
        8.0,
        "Windfalls feel bigger than they are.",
        "Bank the bonus before lifestyle creep finds it.",
        "income",
        "Decide its job the day it arrives.",
        "Discipline beats celebration.",
    ));

    // 1: Candlestick Patterns
    add(1, ev(
        "A bullish engulfing candle closes the week.",
        6.0,
        "Candles summarize the fight between buyers and sellers.",
        "Confirm patterns with volume before acting.",
        "technical",
        "One candle is a hint, not a promise.",
        "Read the story, not just the shape.",
    ));
    add(1, ev(
        "An evening star forms at the top of the rally.",
        -7.0,
        "Reversal patterns appear when optimism peaks.",
        "Tighten stops when reversal candles stack up.",
        "technical",
        "Respect the warning even if you disagree.",
        "The chart does not care about your entry price.",
    ));

    // 2: Moving Averages
    add(2, ev(
        "Price reclaims the 200-day moving average.",
        6.0,
        "Long averages mark the tide, short ones the waves.",
        "Trade with the tide, not against it.",
        "technical",
        "Let the trend confirm before sizing up.",
        "Patience keeps you on the right side.",
    ));
    add(2, ev(
        "A death cross prints on the daily chart.",
        -6.0,
        "Crossovers lag; by the time they print, damage is done.",
        "Use averages as context, not triggers.",
        "technical",
        "Review exposure instead of freezing.",
        "Indicators describe, they do not decide.",
    ));

    // 3: Technical Indicators I
    add(3, ev(
        "RSI climbs out of oversold territory.",
        5.0,
        "Oscillators measure exhaustion, not direction.",
        "Pair momentum signals with a trend filter.",
        "technical",
        "A bounce needs follow-through to matter.",
        "Signals are probabilities, not certainties.",
    ));
    add(3, ev(
        "Bearish divergence: price rises, momentum fades.",
        -5.0,
        "Divergence warns that fewer buyers carry the move.",
        "Scale out while the crowd is still cheering.",
        "technical",
        "Selling into strength feels wrong and works.",
        "Be greedy on evidence, not on hope.",
    ));

    // 4: Technical Indicators II
    add(4, ev(
        "MACD turns up from below the zero line.",
        5.0,
        "Momentum shifts show up before price confirms.",
        "Wait for the signal line cross, not the headline.",
        "technical",
        "Early is only right if you size small.",
        "Let winners prove themselves.",
    ));
    add(4, ev(
        "Bollinger bands squeeze, then break downward.",
        -6.0,
        "Low volatility precedes big moves in either direction.",
        "Plan both outcomes before the break picks one.",
        "technical",
        "A squeeze rewards the prepared, not the brave.",
        "Direction is decided by the market, not by you.",
    ));

    // 5: Chart Patterns I
    add(5, ev(
        "A cup-and-handle completes on strong volume.",
        7.0,
        "Bases show supply being absorbed over time.",
        "Buy breakouts, but only with volume behind them.",
        "technical",
        "Chase the confirmation, never the gap.",
        "Good entries come from boring waiting.",
    ));
    add(5, ev(
        "Support fails and a descending triangle resolves down.",
        -8.0,
        "Repeated tests weaken a floor before it breaks.",
        "Exit plans are written before the break, not after.",
        "technical",
        "Take the small loss the pattern offers.",
        "Hope is not a support level.",
    ));

    // 6: Chart Patterns II
    add(6, ev(
        "An inverse head-and-shoulders breaks the neckline.",
        7.0,
        "Bottoming patterns need time and a neckline break.",
        "Measure the target from the pattern height.",
        "technical",
        "Let the retest hold before adding.",
        "Structure first, story second.",
    ));
    add(6, ev(
        "A double top rejects the prior high.",
        -7.0,
        "Failure at resistance twice is a message.",
        "Respect levels the market has defended.",
        "technical",
        "Reduce, observe, re-enter if proven wrong.",
        "Flexibility outlives conviction.",
    ));

    // 7: Institutional Holdings
    add(7, ev(
        "Filings show funds quietly accumulating the stock.",
        8.0,
        "Large holders move first and tell you later.",
        "Follow the filings, not the forum posts.",
        "flows",
        "Ride with informed money, with your own stop.",
        "Borrowed conviction still needs your risk plan.",
    ));
    add(7, ev(
        "A major insider dumps a block at the open.",
        -8.0,
        "Insider selling clusters before bad quarters.",
        "One sale is noise; a pattern of sales is signal.",
        "flows",
        "Check the context before assuming the worst.",
        "React to evidence, not to fear.",
    ));

    // 8: Market Sentiment
    add(8, ev(
        "Extreme pessimism: the fear index spikes.",
        9.0,
        "Crowds overshoot in both directions.",
        "Be greedy only when fear is measurable, not fashionable.",
        "sentiment",
        "Buying fear requires cash held in advance.",
        "Courage is a budget line, not a mood.",
    ));
    add(8, ev(
        "Euphoria: retail volume hits a record.",
        -9.0,
        "Tops are made when everyone is already in.",
        "Trim when taxi drivers share stock tips.",
        "sentiment",
        "Leaving a party early beats leaving last.",
        "Envy is the most expensive emotion.",
    ));

    // 9: Windfall (special)
    add(9, ev(
        "A relative's gift lands in your brokerage account.",
        15.0,
        "Luck happens; plans make it matter.",
        "Treat found money with the same rules as earned money.",
        "fortune",
        "Gratitude, then allocation.",
        "Windfalls test discipline more than droughts do.",
    ));
    add(9, ev(
        "An old side project finally pays out.",
        10.0,
        "Optionality compounds quietly.",
        "Keep planting small seeds beside the main portfolio.",
        "fortune",
        "Collect, thank, reinvest.",
        "Many small bets beat one big wish.",
    ));

    // 10: Order Flow
    add(10, ev(
        "Aggressive buying lifts the offer all session.",
        6.0,
        "The tape shows urgency that charts smooth away.",
        "Strong closes matter more than strong opens.",
        "flows",
        "Follow strength, but define your exit first.",
        "The tape is honest; interpretations are not.",
    ));
    add(10, ev(
        "Sell programs hit every bounce into the close.",
        -6.0,
        "Persistent selling absorbs every dip-buyer.",
        "Do not argue with a one-way tape.",
        "flows",
        "Stand aside until the pressure lifts.",
        "Cash is a position too.",
    ));

    // 11: Balance Sheet
    add(11, ev(
        "Net cash position revealed: more cash than debt.",
        8.0,
        "A fortress balance sheet buys time in downturns.",
        "Check the balance sheet before the income statement.",
        "fundamental",
        "Strong balance sheets let you hold through storms.",
        "Survival precedes returns.",
    ));
    add(11, ev(
        "Hidden leverage surfaces in the footnotes.",
        -10.0,
        "Debt lives in footnotes as often as in headlines.",
        "Read what management hopes you will skip.",
        "fundamental",
        "Sell first when trust breaks, ask later.",
        "If the numbers hide, assume the worst.",
    ));

    // 12: Income Statement
    add(12, ev(
        "Earnings beat with margins expanding.",
        9.0,
        "Margin direction tells more than the beat itself.",
        "Compare growth in profit to growth in revenue.",
        "fundamental",
        "Reward quality beats, not engineered ones.",
        "Profits are an opinion; cash is a fact.",
    ));
    add(12, ev(
        "Revenue grows but profit evaporates.",
        -8.0,
        "Growth without profit is a donation to customers.",
        "Ask who pays for the growth.",
        "fundamental",
        "Re-underwrite the thesis, not the stock price.",
        "Size follows conviction, conviction follows evidence.",
    ));

    // 13: Dividend Policy
    add(13, ev(
        "A dividend raise marks decades of steady payouts.",
        6.0,
        "Payout streaks signal confident, disciplined boards.",
        "Reinvest dividends while you still have decades.",
        "fundamental",
        "Let compounding do the heavy lifting.",
        "Boring is beautiful.",
    ));
    add(13, ev(
        "The dividend is cut to protect the balance sheet.",
        -7.0,
        "A cut is painful but sometimes the healthy choice.",
        "Judge the reason for the cut, not the cut itself.",
        "fundamental",
        "Income investors must diversify income sources.",
        "Yesterday's yield is not a contract.",
    ));

    // 14: Cash Flow
    add(14, ev(
        "Free cash flow comes in far above reported profit.",
        8.0,
        "Cash conversion separates real earnings from accruals.",
        "Trace profit down to operating cash flow.",
        "fundamental",
        "Trust the cash flow statement first.",
        "Cash pays the bills; earnings pay the headlines.",
    ));
    add(14, ev(
        "Receivables balloon while reported sales hold up.",
        -8.0,
        "Selling on credit books revenue before reality.",
        "Watch receivables growth versus sales growth.",
        "fundamental",
        "Channel stuffing always ends the same way.",
        "When cash and earnings diverge, believe cash.",
    ));

    // 15: Valuation
    add(15, ev(
        "A quality franchise trades below its historic multiple.",
        8.0,
        "Price is what you pay; value is what you get.",
        "Keep a watchlist with prices you would pay.",
        "fundamental",
        "Buy fear in great businesses, not in poor ones.",
        "Entry price is the one variable you fully control.",
    ));
    add(15, ev(
        "The hot stock now trades at 60 times sales.",
        -9.0,
        "At extreme multiples, perfection is already priced in.",
        "Great company and great stock are different claims.",
        "fundamental",
        "Admire from a distance, or size tiny.",
        "Paying any price is a strategy for losing slowly.",
    ));

    // 16: Corporate Governance
    add(16, ev(
        "Management buys back shares below intrinsic value.",
        7.0,
        "Good capital allocation compounds for shareholders.",
        "Watch what boards do with spare cash.",
        "fundamental",
        "Align yourself with owner-operators.",
        "Incentives explain most corporate behavior.",
    ));
    add(16, ev(
        "An accounting scandal forces the CFO out.",
        -12.0,
        "Governance failures rarely happen only once.",
        "Discount companies whose numbers needed restating.",
        "fundamental",
        "There is never just one cockroach.",
        "Character risk cannot be hedged, only avoided.",
    ));

    // 17: Sustainability
    add(17, ev(
        "The firm tops its industry sustainability ranking.",
        5.0,
        "Durable franchises manage more than quarterly numbers.",
        "Treat ESG as a risk lens, not a halo.",
        "fundamental",
        "Long-horizon owners care about long-horizon risks.",
        "What is unsustainable eventually stops.",
    ));
    add(17, ev(
        "Regulators fine the company for emissions fraud.",
        -8.0,
        "Greenwashing converts into fines and lost trust.",
        "Verify claims against disclosures, not slogans.",
        "fundamental",
        "Trust is an asset with a cliff, not a slope.",
        "Cheap virtue is expensive in the end.",
    ));

    // 18: Breather (special)
    add(18, ev(
        "Vacation week: you close the charts and rest.",
        0.0,
        "Rest protects judgment, and judgment protects capital.",
        "Schedule time away from the screen.",
        "life",
        "The market will still be there on Monday.",
        "Missing a trade is cheaper than burning out.",
    ));
    add(18, ev(
        "A health check and a long walk clear your head.",
        2.0,
        "Your earning power is your biggest asset.",
        "Invest in the machine that makes the money: you.",
        "life",
        "Health costs compound like returns do.",
        "No portfolio outperforms a hospital bill.",
    ));

    // 19: Commodity Prices
    add(19, ev(
        "Oil spikes on a surprise supply cut.",
        7.0,
        "Input costs ripple through every income statement.",
        "Know which of your holdings eat, and which sell, commodities.",
        "macro",
        "Hedges are bought before the spike, not during.",
        "Cycles in commodities are violent and normal.",
    ));
    add(19, ev(
        "Iron ore collapses as construction demand stalls.",
        -7.0,
        "Commodity producers are price takers, not makers.",
        "Cost-curve position decides who survives a bust.",
        "macro",
        "Own the low-cost producer or own nothing.",
        "In cycles, balance sheets are destiny.",
    ));

    // 20: Benchmark Indexes
    add(20, ev(
        "Index inclusion forces funds to buy the stock.",
        6.0,
        "Passive flows move prices without opinions.",
        "Front-running rebalances is a crowded trade.",
        "flows",
        "Enjoy the flow, remember it is one-time.",
        "Mechanical buyers are not conviction buyers.",
    ));
    add(20, ev(
        "The index futures gap down overnight.",
        -6.0,
        "Correlation rises exactly when you need it lowest.",
        "Diversification is proven in crashes, not rallies.",
        "market",
        "Gaps punish leverage and reward liquidity.",
        "Overnight risk is still risk.",
    ));

    // 21: Market Competition
    add(21, ev(
        "The main competitor exits the market.",
        8.0,
        "Industry structure drives long-run returns.",
        "Count competitors before counting profits.",
        "industry",
        "Consolidation rewards the patient survivor.",
        "The best moat is a rational industry.",
    ));
    add(21, ev(
        "A price war erupts across the sector.",
        -8.0,
        "Price wars transfer value to customers.",
        "Avoid businesses that compete only on price.",
        "industry",
        "In a knife fight, prefer to hold the door.",
        "Market share bought with margin is rented.",
    ));

    // 22: Supply Chain
    add(22, ev(
        "Bottlenecks clear and deliveries normalize.",
        6.0,
        "Supply normalization shows up in margins next quarter.",
        "Track lead times as a leading indicator.",
        "industry",
        "Operational news moves slower than price news.",
        "Second-order effects pay first-order returns.",
    ));
    add(22, ev(
        "A key supplier halts shipments unexpectedly.",
        -8.0,
        "Single-source supply chains are cheap until they fail.",
        "Map your holdings' critical dependencies.",
        "industry",
        "Resilience costs margin and saves companies.",
        "Efficiency and fragility are twins.",
    ));

    // 23: Five Forces
    add(23, ev(
        "Switching costs lock in the customer base.",
        7.0,
        "Pricing power comes from customers who cannot leave.",
        "Test a moat by asking what leaving would cost.",
        "industry",
        "Pay up for businesses that raise prices painlessly.",
        "Moats are measured in customer pain.",
    ));
    add(23, ev(
        "A low-cost entrant undercuts the incumbents.",
        -7.0,
        "High margins invite their own competition.",
        "Ask what stops a hungrier rival, always.",
        "industry",
        "Incumbency without advantage is a countdown.",
        "Yesterday's moat is today's marketing slide.",
    ));

    // 24: International Finance
    add(24, ev(
        "The home currency weakens, lifting exporters.",
        6.0,
        "Currency moves redistribute profits across borders.",
        "Know each holding's currency of costs and of sales.",
        "macro",
        "Hedge exposures you cannot afford to keep.",
        "FX is a silent partner in every foreign position.",
    ));
    add(24, ev(
        "An emerging market defaults on dollar debt.",
        -8.0,
        "Borrowing in someone else's currency is fragile.",
        "Contagion spreads through lenders, not headlines.",
        "macro",
        "Check who holds the bad paper.",
        "Crises cross borders faster than growth does.",
    ));

    // 25: Monetary Policy
    add(25, ev(
        "A surprise rate cut ignites risk assets.",
        8.0,
        "Discount rates reprice everything at once.",
        "Do not fight the central bank, in either direction.",
        "macro",
        "Liquidity lifts all boats until it ebbs.",
        "Policy is a tide, not a forecast.",
    ));
    add(25, ev(
        "Hawkish minutes: hikes will run longer than hoped.",
        -8.0,
        "Tightening drains the easy-money trades first.",
        "Shorten duration when the punch bowl leaves.",
        "macro",
        "Repricing is fast; deleveraging is faster.",
        "The cost of money is the gravity of markets.",
    ));

    // 26: Fiscal Policy
    add(26, ev(
        "A stimulus package targets your sector.",
        7.0,
        "Fiscal flows pick sectoral winners.",
        "Read the budget like an earnings report.",
        "macro",
        "Subsidized demand is real demand, while it lasts.",
        "Policy tailwinds end at the next election.",
    ));
    add(26, ev(
        "A windfall tax lands on the industry's profits.",
        -7.0,
        "What the state gives, the state can reclaim.",
        "Model policy risk into terminal values.",
        "macro",
        "Price regulation risk before it prices you.",
        "Profits attract taxes like heat attracts eyes.",
    ));

    // 27: Fate & Fortune (special)
    add(27, ev(
        "Your broker's error is corrected in your favor.",
        12.0,
        "Randomness cuts both ways; this time it smiled.",
        "Never build a plan that needs luck to work.",
        "fortune",
        "Take the gift, audit the account.",
        "Fortune favors the diversified.",
    ));
    add(27, ev(
        "A burst pipe floods your study: repairs due.",
        -10.0,
        "Life expenses arrive uncorrelated with markets.",
        "Keep an emergency fund outside the portfolio.",
        "fortune",
        "Insurance is bought before the storm.",
        "The unexpected is the only certainty.",
    ));
    add(27, ev(
        "A forgotten account resurfaces with old savings.",
        9.0,
        "Record-keeping is unglamorous alpha.",
        "Inventory your assets once a year.",
        "fortune",
        "Found money follows tidy books.",
        "Order is a return on its own.",
    ));

    // 28: Financial Markets
    add(28, ev(
        "A calm melt-up: low volatility, steady gains.",
        6.0,
        "Quiet trends are where most compounding happens.",
        "Stay invested through the boring stretches.",
        "market",
        "Do less when less is working.",
        "Activity is not achievement.",
    ));
    add(28, ev(
        "A liquidity crunch widens every spread at once.",
        -9.0,
        "Liquidity is abundant until the moment it is not.",
        "Keep position sizes sellable on the worst day.",
        "market",
        "Sell what you can, not what you must.",
        "Liquidity risk hides inside every other risk.",
    ));

    // 29: Business Cycle
    add(29, ev(
        "Leading indicators turn up from the trough.",
        7.0,
        "Markets bottom before economies do.",
        "Add risk when the data is bad but improving.",
        "macro",
        "Early-cycle courage pays late-cycle bills.",
        "The cycle always returns, in both directions.",
    ));
    add(29, ev(
        "The yield curve inverts; recession odds jump.",
        -7.0,
        "Inversions warn early and are early.",
        "Use warnings to rebalance, not to panic.",
        "macro",
        "Prepare portfolios before the storm makes it cheap to talk.",
        "Forewarned is only useful if it changes behavior.",
    ));

    // 30: Jobs & Inflation
    add(30, ev(
        "Inflation cools while employment holds.",
        7.0,
        "A soft landing rewards balanced portfolios.",
        "Avoid betting the whole book on one scenario.",
        "macro",
        "Let the data, not the narrative, update you.",
        "Humility is a position size.",
    ));
    add(30, ev(
        "Hot CPI print; real wages are shrinking.",
        -7.0,
        "Inflation is a tax on cash and on nerves.",
        "Own assets with pricing power in inflationary runs.",
        "macro",
        "Renegotiate, reprice, rebalance.",
        "Nominal comfort hides real losses.",
    ));

    // 31: Regulatory Shifts
    add(31, ev(
        "A licensing regime blesses the incumbents.",
        6.0,
        "Regulation can be a moat paid for by taxpayers.",
        "Read proposed rules before the market prices them.",
        "policy",
        "Compliance costs crush the small first.",
        "Rules reshape industries faster than products do.",
    ));
    add(31, ev(
        "An antitrust suit targets the platform's core business.",
        -9.0,
        "Legal risk arrives suddenly after growing slowly.",
        "Cap position sizes where the state is the counterparty.",
        "policy",
        "Litigation timelines outlast most investors' patience.",
        "You cannot discount what a court will decide.",
    ));

    // 32: Geopolitics
    add(32, ev(
        "A trade agreement reopens a key export market.",
        7.0,
        "Peace dividends show up in freight and in margins.",
        "Watch tariffs like you watch interest rates.",
        "macro",
        "Political thaw is investable but reversible.",
        "Borders move markets.",
    ));
    add(32, ev(
        "Conflict erupts near a critical shipping lane.",
        -9.0,
        "Geopolitical shocks hit energy and insurance first.",
        "Keep a sleeve of assets that benefit from chaos.",
        "macro",
        "Hedge the route, not the headline.",
        "The world is not obligated to stay calm.",
    ));

    // 33: Climate & Pandemics
    add(33, ev(
        "A mild season lifts harvests and logistics.",
        5.0,
        "Weather is a macro variable with no press conference.",
        "Respect tail risks that compound across years.",
        "macro",
        "Good years fund preparations for bad ones.",
        "Nature sets the boundary conditions.",
    ));
    add(33, ev(
        "A new outbreak closes ports and factories.",
        -10.0,
        "Biological shocks stop economies without warning.",
        "Stress-test holdings against closed-world scenarios.",
        "macro",
        "Liquidity and patience are pandemic insurance.",
        "Black swans are only black in hindsight.",
    ));

    // 34: Tech Breakthroughs
    add(34, ev(
        "A breakthrough slashes your holding's production costs.",
        9.0,
        "Technology moves cost curves, then market shares.",
        "Back the adopters, not only the inventors.",
        "industry",
        "Disruption is a process, not an event.",
        "Curiosity is a form of risk management.",
    ));
    add(34, ev(
        "A rival's innovation makes the flagship product obsolete.",
        -10.0,
        "Obsolescence is the terminal risk of every franchise.",
        "Re-underwrite moats after every major launch.",
        "industry",
        "Sell the buggy-whip maker early.",
        "Loyalty belongs to theses, not to tickers.",
    ));

    // 35: Global Economy
    add(35, ev(
        "Synchronized global growth lifts all regions.",
        8.0,
        "Rising tides hide individual mistakes.",
        "Bank some gains while correlation is your friend.",
        "macro",
        "In good times, prepare the shopping list.",
        "Booms are when discipline is cheapest.",
    ));
    add(35, ev(
        "A global slowdown drags every forecast lower.",
        -8.0,
        "No market decouples from a true global downturn.",
        "Hold dry powder sized to your nerves.",
        "macro",
        "Buy when the shopping list goes on sale.",
        "Bear markets transfer wealth to the prepared.",
    ));

    cat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TopicId;

    #[test]
    fn test_every_topic_has_events() {
        let cat = builtin();
        assert_eq!(cat.topic_count(), 36);
        for topic in TopicId::all() {
            assert!(cat.records(topic).len() >= 2, "{} too thin", topic.name());
        }
    }

    #[test]
    fn test_impacts_are_bounded() {
        let cat = builtin();
        for topic in TopicId::all() {
            for rec in cat.records(topic) {
                assert!(
                    rec.impact.abs() <= 20.0,
                    "outsized impact on {}: {}",
                    topic.name(),
                    rec.impact
                );
            }
        }
    }

    #[test]
    fn test_ordinary_topics_have_signed_variety() {
        // Every ordinary topic carries both upside and downside events,
        // so leverage is a real decision everywhere on the board.
        let cat = builtin();
        for topic in TopicId::all().filter(|t| !t.is_special()) {
            let records = cat.records(topic);
            assert!(records.iter().any(|r| r.impact > 0.0), "{}", topic.name());
            assert!(records.iter().any(|r| r.impact < 0.0), "{}", topic.name());
        }
    }
}

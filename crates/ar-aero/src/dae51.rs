//! DAE-51 section polars at Re = 1e6, alpha in radians from -25° to 55°.

/// Reference Reynolds number of the sampled polars.
pub(crate) const REYNOLDS: f64 = 1e6;

/// Lift coefficient, forward flow.
pub(crate) const LIFT: [(f64, f64); 23] = [
    (-0.436332313, -0.62286894),
    (-0.3490658504, -0.5375499),
    (-0.2617993878, -0.40355853),
    (-0.1745329252, -0.31516635),
    (-0.1396263402, -0.26242659),
    (-0.1047197551, -0.16900409),
    (-0.06981317008, -0.021360144),
    (-0.03490658504, 0.19118146),
    (0.0, 0.39933459),
    (0.03490658504, 0.62167793),
    (0.06981317008, 0.82048786),
    (0.1047197551, 0.93943706),
    (0.1396263402, 0.91766234),
    (0.1745329252, 1.0738337),
    (0.2617993878, 0.95249894),
    (0.3490658504, 0.95610401),
    (0.436332313, 1.0044682),
    (0.5235987756, 1.0191244),
    (0.6108652382, 1.0709564),
    (0.6981317008, 1.1024401),
    (0.7853981634, 1.1041184),
    (0.872664626, 1.0783589),
    (0.9599310886, 1.013605),
];

/// Drag coefficient, forward flow.
pub(crate) const DRAG: [(f64, f64); 23] = [
    (-0.436332313, 0.37781166),
    (-0.3490658504, 0.26392221),
    (-0.2617993878, 0.17215489),
    (-0.1745329252, 0.10409953),
    (-0.1396263402, 0.074132374),
    (-0.1047197551, 0.055134778),
    (-0.06981317008, 0.036927284),
    (-0.03490658504, 0.025270896),
    (0.0, 0.018184236),
    (0.03490658504, 0.021953756),
    (0.06981317008, 0.029440516),
    (0.1047197551, 0.051744512),
    (0.1396263402, 0.08820373),
    (0.1745329252, 0.11223418),
    (0.2617993878, 0.18383662),
    (0.3490658504, 0.29796849),
    (0.436332313, 0.42042049),
    (0.5235987756, 0.5754442),
    (0.6108652382, 0.7356429),
    (0.6981317008, 0.92286753),
    (0.7853981634, 1.0778461),
    (0.872664626, 1.2629665),
    (0.9599310886, 1.4016037),
];

/// Lift coefficient, reversed flow (trailing edge leading).
pub(crate) const LIFT_REVERSED: [(f64, f64); 23] = [
    (-0.436332313, 0.8625198),
    (-0.3490658504, 0.78064613),
    (-0.2617993878, 0.77163174),
    (-0.1745329252, 0.92676684),
    (-0.1396263402, 0.88272408),
    (-0.1047197551, 0.8123486),
    (-0.06981317008, 0.71720479),
    (-0.03490658504, 0.65349604),
    (0.0, 0.40962666),
    (0.03490658504, 0.22224746),
    (0.06981317008, 0.11600063),
    (0.1047197551, 0.0081612337),
    (0.1396263402, -0.24529097),
    (0.1745329252, -0.20547747),
    (0.2617993878, -0.18605256),
    (0.3490658504, -0.31289578),
    (0.436332313, -0.41758209),
    (0.5235987756, -0.47010328),
    (0.6108652382, -0.49180354),
    (0.6981317008, -0.56641723),
    (0.7853981634, -0.64230682),
    (0.872664626, -0.67469166),
    (0.9599310886, -0.64981738),
];

/// Drag coefficient, reversed flow.
pub(crate) const DRAG_REVERSED: [(f64, f64); 23] = [
    (-0.436332313, 0.4032045),
    (-0.3490658504, 0.27544315),
    (-0.2617993878, 0.17710651),
    (-0.1745329252, 0.10634668),
    (-0.1396263402, 0.075091242),
    (-0.1047197551, 0.052473904),
    (-0.06981317008, 0.034827825),
    (-0.03490658504, 0.023995526),
    (0.0, 0.018284585),
    (0.03490658504, 0.023042524),
    (0.06981317008, 0.033051952),
    (0.1047197551, 0.053107724),
    (0.1396263402, 0.087665586),
    (0.1745329252, 0.10693677),
    (0.2617993878, 0.15154737),
    (0.3490658504, 0.23386554),
    (0.436332313, 0.33334358),
    (0.5235987756, 0.43478519),
    (0.6108652382, 0.53529064),
    (0.6981317008, 0.68185475),
    (0.7853981634, 0.86292088),
    (0.872664626, 1.0343788),
    (0.9599310886, 1.1862034),
];

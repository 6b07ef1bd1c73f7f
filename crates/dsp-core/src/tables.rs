//! Read-only lookup tables
//!
//! All tables are plain statics, so they can be read from any number of
//! threads without synchronisation.

/// Hanning window, Q15, 513 entries symmetric around index 256
///
/// `HANNING_TABLE[i] = min(32767, round(16384 * (1 - cos(2*pi*i / 512))))`.
/// [`crate::filter::get_hanning_window`] reads the rising half.
pub static HANNING_TABLE: [i16; 513] = [
         0,      1,      5,     11,     20,     31,     44,     60,     79,
       100,    123,    149,    177,    208,    241,    277,    315,    355,
       398,    443,    491,    541,    593,    648,    705,    765,    827,
       891,    958,   1027,   1098,   1171,   1247,   1325,   1406,   1488,
      1573,   1660,   1749,   1841,   1935,   2030,   2128,   2229,   2331,
      2435,   2542,   2651,   2761,   2874,   2989,   3105,   3224,   3345,
      3468,   3592,   3719,   3847,   3978,   4110,   4244,   4380,   4518,
      4657,   4799,   4942,   5087,   5233,   5381,   5531,   5682,   5835,
      5990,   6146,   6304,   6463,   6624,   6786,   6950,   7115,   7282,
      7449,   7619,   7789,   7961,   8134,   8308,   8484,   8661,   8839,
      9018,   9198,   9379,   9561,   9745,   9929,  10114,  10300,  10487,
     10676,  10864,  11054,  11245,  11436,  11628,  11821,  12014,  12208,
     12403,  12598,  12794,  12991,  13188,  13385,  13583,  13781,  13980,
     14179,  14378,  14578,  14778,  14978,  15179,  15379,  15580,  15781,
     15982,  16183,  16384,  16585,  16786,  16987,  17188,  17389,  17589,
     17790,  17990,  18190,  18390,  18589,  18788,  18987,  19185,  19383,
     19580,  19777,  19974,  20170,  20365,  20560,  20754,  20947,  21140,
     21332,  21523,  21714,  21904,  22092,  22281,  22468,  22654,  22839,
     23023,  23207,  23389,  23570,  23750,  23929,  24107,  24284,  24460,
     24634,  24807,  24979,  25149,  25319,  25486,  25653,  25818,  25982,
     26144,  26305,  26464,  26622,  26778,  26933,  27086,  27237,  27387,
     27535,  27681,  27826,  27969,  28111,  28250,  28388,  28524,  28658,
     28790,  28921,  29049,  29176,  29300,  29423,  29544,  29663,  29779,
     29894,  30007,  30117,  30226,  30333,  30437,  30539,  30640,  30738,
     30833,  30927,  31019,  31108,  31195,  31280,  31362,  31443,  31521,
     31597,  31670,  31741,  31810,  31877,  31941,  32003,  32063,  32120,
     32175,  32227,  32277,  32325,  32370,  32413,  32453,  32491,  32527,
     32560,  32591,  32619,  32645,  32668,  32689,  32708,  32724,  32737,
     32748,  32757,  32763,  32767,  32767,  32767,  32763,  32757,  32748,
     32737,  32724,  32708,  32689,  32668,  32645,  32619,  32591,  32560,
     32527,  32491,  32453,  32413,  32370,  32325,  32277,  32227,  32175,
     32120,  32063,  32003,  31941,  31877,  31810,  31741,  31670,  31597,
     31521,  31443,  31362,  31280,  31195,  31108,  31019,  30927,  30833,
     30738,  30640,  30539,  30437,  30333,  30226,  30117,  30007,  29894,
     29779,  29663,  29544,  29423,  29300,  29176,  29049,  28921,  28790,
     28658,  28524,  28388,  28250,  28111,  27969,  27826,  27681,  27535,
     27387,  27237,  27086,  26933,  26778,  26622,  26464,  26305,  26144,
     25982,  25818,  25653,  25486,  25319,  25149,  24979,  24807,  24634,
     24460,  24284,  24107,  23929,  23750,  23570,  23389,  23207,  23023,
     22839,  22654,  22468,  22281,  22092,  21904,  21714,  21523,  21332,
     21140,  20947,  20754,  20560,  20365,  20170,  19974,  19777,  19580,
     19383,  19185,  18987,  18788,  18589,  18390,  18190,  17990,  17790,
     17589,  17389,  17188,  16987,  16786,  16585,  16384,  16183,  15982,
     15781,  15580,  15379,  15179,  14978,  14778,  14578,  14378,  14179,
     13980,  13781,  13583,  13385,  13188,  12991,  12794,  12598,  12403,
     12208,  12014,  11821,  11628,  11436,  11245,  11054,  10864,  10676,
     10487,  10300,  10114,   9929,   9745,   9561,   9379,   9198,   9018,
      8839,   8661,   8484,   8308,   8134,   7961,   7789,   7619,   7449,
      7282,   7115,   6950,   6786,   6624,   6463,   6304,   6146,   5990,
      5835,   5682,   5531,   5381,   5233,   5087,   4942,   4799,   4657,
      4518,   4380,   4244,   4110,   3978,   3847,   3719,   3592,   3468,
      3345,   3224,   3105,   2989,   2874,   2761,   2651,   2542,   2435,
      2331,   2229,   2128,   2030,   1935,   1841,   1749,   1660,   1573,
      1488,   1406,   1325,   1247,   1171,   1098,   1027,    958,    891,
       827,    765,    705,    648,    593,    541,    491,    443,    398,
       355,    315,    277,    241,    208,    177,    149,    123,    100,
        79,     60,     44,     31,     20,     11,      5,      1,      0,
];

/// Gaussian noise samples, zero mean, standard deviation about 7000
///
/// Samples are clamped to four standard deviations. The generators in
/// [`crate::random`] index this table with the top bits of the LCG seed.
pub static RAND_N_TABLE: [i16; 512] = [
      5204,   -143,  -2043,  -2818,  -9388,   6055,   7661,  -2674,
     -5947,  -3219,  -7136, -12889,  -2694,  21186,  -5133,  -4980,
     -3133,   2381,  -2727,  -1067,   1280,   4037,   5279,   -515,
     -6564, -10751,  15684,  -2127,  -1972,   2075,  -5407,    296,
      3898,    -35,   -434,   1004,   7556,  11529,  -9394,  12575,
     -4193,   4105,   7518,     95,  14907,  -7891,    481,  -2070,
     15268,   8634,    746,  -6958,   -499,    -36, -12538,  -4257,
     -3007,  -1559,  -4407,   2668,   2261, -10022,    -82,  10035,
     -6728,  -3259,  -8492,   3322,   5343,   4279,   -622,   6800,
     -5312,   -862,  17032,   4634,  -5400,   6078,  -4617,   5873,
      -547,  -8468,   2403,  -6128,  -1684,  -5527,   7846,  -9780,
      -340,  -1151,   1171,   6220,   -423,  -8533,  -5256,   1517,
      6706,   3310,   9503,   8836,   3584,   -663,  -7431,   3663,
     -3962,    929,    521,  16579,   -357,   -191,  15340,   6144,
     -7693,   2689,  -6792,   1660, -10808,  -4429,    606,   7674,
     -7948,   7516,  15505,   4610,   1956,  15891,   4875,   3281,
     -3641,  -3301,  -7796,   1559,  -9352,   8183,  -1345,  13142,
      6245,   -523,   4952,  -8175,   2850,   6919,   -944,  -3664,
       180,   4059,  10479,  -8186,   8110,   -353,  -8605,  11289,
     -1713,  10115, -14295,  -6756,   -503,   6687, -11843,    283,
      1305, -16404,  -2307,  -2345,   5097,  -8981,   1594,   6299,
      7208,   6225,   5762,   1729,   5832,   6175,   1605,  -5484,
     -4523,    635,  -2966,  -2948,  -7168,  14217,  -9801,    989,
      4508,   1357, -11148,  10933,   -675,  -3947,  -1735,    696,
    -13191,  -7006, -12121,   1383,   2141,   7881,  -4625, -10458,
     -2527,  -4794,  -5357,   2613,    819,  -6951,  -2830,   4112,
    -13340,  -2818,   9748,  -6698,    807,   2092,  -2489,  -8636,
      -272,  10020,  -6130,  -6777,  -1037,  12156,  -6580,   6683,
     -2569, -14645,  -9102,   2831,  -4583,  -1420,   3880,  13639,
    -10055,   3850,   2552, -12496,   6187,  17646,   3435,   4699,
     15859,  10734, -13255,   2889, -13068,  -4902,  -4023, -13449,
      2714,   7012,  -4251,   2984, -11699,  -4136, -11234,   6381,
      2790,  -2827,  -2945,   9291,  19022,  -1958,  -2436,  -1943,
     -4049,  -7930,   6607,  -2922,  -1556,   3013,  -5453,   5052,
      4272,   4664,   6734,  -4809,  -6463,    773,    970,  -6055,
     -4449,  -4136,  -4684,   1396, -12696,  -4376,  -4116,   4160,
      5158,   8126,  -1131,  -5615,   3792,   5519, -10415,  -3265,
       845,   8868, -12452,  -6505,   3381,  -1497,    880,   8279,
      2734,  -2641,   8738,   1890,   3118,  -7738,  -6508,   1057,
     -4115,   1343, -12907,  -2046,  -4639,  -8245,  -3574,   8089,
     -4933, -11409,  -4995,   1546,  12459,   1733,  -3049,   5662,
     -1407,  -2707,  -3295,  -4731,  13273,   -274,  -7460, -12198,
      4202,  -8240,  -6925, -14024,   6130,  -5747,   4856,   7294,
     -4612,   1237,   2545,   8804,  -4455,   -891,  -3802,  -7858,
     -4265,  -4918,   5608,   6941,   3772,  15964,   7780,  -5825,
      2036,   4922,  -1645,  -2584,   9392,  -2356,   1660,  10155,
      5732,  -2795,   -905,  -1839,    145,  14271, -11266,   8653,
      7369,  -2314,    147,   2439,  -2316,  -3632,  13223,  10862,
      -928,   3014,  -1441,   -906,  -9986,  -9441,   5675,  10414,
      2652,  -7497,   7226,   7146,  -6987,   7376,  20238,  -2772,
     -2579,   -807,   2650,   4701,  -5895,  -7218,  -8911,   7861,
      2928,   2151,   -638,   2940,   -941,  -3293,  -3277, -10639,
    -11932,   2746,  -2541,  -3838,  -4555,   7376,  -1135,  -4132,
     -4605,  -6027,   -177,  -3860,   -707, -18684,   -348,   5421,
     -9740,  -8376,  -9125,  -5873,   1777,   5148,   5857,   4528,
      7673,  14572,  -7864,  -8930,   9030,  -5269,   4422,   8530,
    -10989,  -3930,  -8165,  -3138,   2584,   2900,   3386,  -1749,
      2955,   5681,    696,   -322,   4618,   5201,  -9857,  -2084,
     -9014,   7475,  -5594,  -2703, -14487,   2080,  -5767,  -2888,
      2914,   9614,  20829,   8506,  -2087,  -5186,  10010,   2849,
      2787,  -1884,   6627,  -6025,   5845,   -141,  -3658,   1494,
     -6287,  19808,  10003, -14956,   7993,   -953,   8241,   5003,
     -8293, -15032,  -2264,   6709,  -7068,  -5974,  -4145,   -761,
      1141,   3354,  12166,     33,  -1197,   9664,  -7540,   8076,
];


/// One full period of a sine, Q15, 1024 entries
///
/// `SIN_TABLE_1024[i] = round(32767 * sin(2*pi*i / 1024))`. The cosine of
/// the same angle is read a quarter period later, at `i + 256`.
/// [`crate::fft`] takes its twiddle factors from here.
pub static SIN_TABLE_1024: [i16; 1024] = [
         0,    201,    402,    603,    804,   1005,   1206,   1407,
      1608,   1809,   2009,   2210,   2410,   2611,   2811,   3012,
      3212,   3412,   3612,   3811,   4011,   4210,   4410,   4609,
      4808,   5007,   5205,   5404,   5602,   5800,   5998,   6195,
      6393,   6590,   6786,   6983,   7179,   7375,   7571,   7767,
      7962,   8157,   8351,   8545,   8739,   8933,   9126,   9319,
      9512,   9704,   9896,  10087,  10278,  10469,  10659,  10849,
     11039,  11228,  11417,  11605,  11793,  11980,  12167,  12353,
     12539,  12725,  12910,  13094,  13279,  13462,  13645,  13828,
     14010,  14191,  14372,  14553,  14732,  14912,  15090,  15269,
     15446,  15623,  15800,  15976,  16151,  16325,  16499,  16673,
     16846,  17018,  17189,  17360,  17530,  17700,  17869,  18037,
     18204,  18371,  18537,  18703,  18868,  19032,  19195,  19357,
     19519,  19680,  19841,  20000,  20159,  20317,  20475,  20631,
     20787,  20942,  21096,  21250,  21403,  21554,  21705,  21856,
     22005,  22154,  22301,  22448,  22594,  22739,  22884,  23027,
     23170,  23311,  23452,  23592,  23731,  23870,  24007,  24143,
     24279,  24413,  24547,  24680,  24811,  24942,  25072,  25201,
     25329,  25456,  25582,  25708,  25832,  25955,  26077,  26198,
     26319,  26438,  26556,  26674,  26790,  26905,  27019,  27133,
     27245,  27356,  27466,  27575,  27683,  27790,  27896,  28001,
     28105,  28208,  28310,  28411,  28510,  28609,  28706,  28803,
     28898,  28992,  29085,  29177,  29268,  29358,  29447,  29534,
     29621,  29706,  29791,  29874,  29956,  30037,  30117,  30195,
     30273,  30349,  30424,  30498,  30571,  30643,  30714,  30783,
     30852,  30919,  30985,  31050,  31113,  31176,  31237,  31297,
     31356,  31414,  31470,  31526,  31580,  31633,  31685,  31736,
     31785,  31833,  31880,  31926,  31971,  32014,  32057,  32098,
     32137,  32176,  32213,  32250,  32285,  32318,  32351,  32382,
     32412,  32441,  32469,  32495,  32521,  32545,  32567,  32589,
     32609,  32628,  32646,  32663,  32678,  32692,  32705,  32717,
     32728,  32737,  32745,  32752,  32757,  32761,  32765,  32766,
     32767,  32766,  32765,  32761,  32757,  32752,  32745,  32737,
     32728,  32717,  32705,  32692,  32678,  32663,  32646,  32628,
     32609,  32589,  32567,  32545,  32521,  32495,  32469,  32441,
     32412,  32382,  32351,  32318,  32285,  32250,  32213,  32176,
     32137,  32098,  32057,  32014,  31971,  31926,  31880,  31833,
     31785,  31736,  31685,  31633,  31580,  31526,  31470,  31414,
     31356,  31297,  31237,  31176,  31113,  31050,  30985,  30919,
     30852,  30783,  30714,  30643,  30571,  30498,  30424,  30349,
     30273,  30195,  30117,  30037,  29956,  29874,  29791,  29706,
     29621,  29534,  29447,  29358,  29268,  29177,  29085,  28992,
     28898,  28803,  28706,  28609,  28510,  28411,  28310,  28208,
     28105,  28001,  27896,  27790,  27683,  27575,  27466,  27356,
     27245,  27133,  27019,  26905,  26790,  26674,  26556,  26438,
     26319,  26198,  26077,  25955,  25832,  25708,  25582,  25456,
     25329,  25201,  25072,  24942,  24811,  24680,  24547,  24413,
     24279,  24143,  24007,  23870,  23731,  23592,  23452,  23311,
     23170,  23027,  22884,  22739,  22594,  22448,  22301,  22154,
     22005,  21856,  21705,  21554,  21403,  21250,  21096,  20942,
     20787,  20631,  20475,  20317,  20159,  20000,  19841,  19680,
     19519,  19357,  19195,  19032,  18868,  18703,  18537,  18371,
     18204,  18037,  17869,  17700,  17530,  17360,  17189,  17018,
     16846,  16673,  16499,  16325,  16151,  15976,  15800,  15623,
     15446,  15269,  15090,  14912,  14732,  14553,  14372,  14191,
     14010,  13828,  13645,  13462,  13279,  13094,  12910,  12725,
     12539,  12353,  12167,  11980,  11793,  11605,  11417,  11228,
     11039,  10849,  10659,  10469,  10278,  10087,   9896,   9704,
      9512,   9319,   9126,   8933,   8739,   8545,   8351,   8157,
      7962,   7767,   7571,   7375,   7179,   6983,   6786,   6590,
      6393,   6195,   5998,   5800,   5602,   5404,   5205,   5007,
      4808,   4609,   4410,   4210,   4011,   3811,   3612,   3412,
      3212,   3012,   2811,   2611,   2410,   2210,   2009,   1809,
      1608,   1407,   1206,   1005,    804,    603,    402,    201,
         0,   -201,   -402,   -603,   -804,  -1005,  -1206,  -1407,
     -1608,  -1809,  -2009,  -2210,  -2410,  -2611,  -2811,  -3012,
     -3212,  -3412,  -3612,  -3811,  -4011,  -4210,  -4410,  -4609,
     -4808,  -5007,  -5205,  -5404,  -5602,  -5800,  -5998,  -6195,
     -6393,  -6590,  -6786,  -6983,  -7179,  -7375,  -7571,  -7767,
     -7962,  -8157,  -8351,  -8545,  -8739,  -8933,  -9126,  -9319,
     -9512,  -9704,  -9896, -10087, -10278, -10469, -10659, -10849,
    -11039, -11228, -11417, -11605, -11793, -11980, -12167, -12353,
    -12539, -12725, -12910, -13094, -13279, -13462, -13645, -13828,
    -14010, -14191, -14372, -14553, -14732, -14912, -15090, -15269,
    -15446, -15623, -15800, -15976, -16151, -16325, -16499, -16673,
    -16846, -17018, -17189, -17360, -17530, -17700, -17869, -18037,
    -18204, -18371, -18537, -18703, -18868, -19032, -19195, -19357,
    -19519, -19680, -19841, -20000, -20159, -20317, -20475, -20631,
    -20787, -20942, -21096, -21250, -21403, -21554, -21705, -21856,
    -22005, -22154, -22301, -22448, -22594, -22739, -22884, -23027,
    -23170, -23311, -23452, -23592, -23731, -23870, -24007, -24143,
    -24279, -24413, -24547, -24680, -24811, -24942, -25072, -25201,
    -25329, -25456, -25582, -25708, -25832, -25955, -26077, -26198,
    -26319, -26438, -26556, -26674, -26790, -26905, -27019, -27133,
    -27245, -27356, -27466, -27575, -27683, -27790, -27896, -28001,
    -28105, -28208, -28310, -28411, -28510, -28609, -28706, -28803,
    -28898, -28992, -29085, -29177, -29268, -29358, -29447, -29534,
    -29621, -29706, -29791, -29874, -29956, -30037, -30117, -30195,
    -30273, -30349, -30424, -30498, -30571, -30643, -30714, -30783,
    -30852, -30919, -30985, -31050, -31113, -31176, -31237, -31297,
    -31356, -31414, -31470, -31526, -31580, -31633, -31685, -31736,
    -31785, -31833, -31880, -31926, -31971, -32014, -32057, -32098,
    -32137, -32176, -32213, -32250, -32285, -32318, -32351, -32382,
    -32412, -32441, -32469, -32495, -32521, -32545, -32567, -32589,
    -32609, -32628, -32646, -32663, -32678, -32692, -32705, -32717,
    -32728, -32737, -32745, -32752, -32757, -32761, -32765, -32766,
    -32767, -32766, -32765, -32761, -32757, -32752, -32745, -32737,
    -32728, -32717, -32705, -32692, -32678, -32663, -32646, -32628,
    -32609, -32589, -32567, -32545, -32521, -32495, -32469, -32441,
    -32412, -32382, -32351, -32318, -32285, -32250, -32213, -32176,
    -32137, -32098, -32057, -32014, -31971, -31926, -31880, -31833,
    -31785, -31736, -31685, -31633, -31580, -31526, -31470, -31414,
    -31356, -31297, -31237, -31176, -31113, -31050, -30985, -30919,
    -30852, -30783, -30714, -30643, -30571, -30498, -30424, -30349,
    -30273, -30195, -30117, -30037, -29956, -29874, -29791, -29706,
    -29621, -29534, -29447, -29358, -29268, -29177, -29085, -28992,
    -28898, -28803, -28706, -28609, -28510, -28411, -28310, -28208,
    -28105, -28001, -27896, -27790, -27683, -27575, -27466, -27356,
    -27245, -27133, -27019, -26905, -26790, -26674, -26556, -26438,
    -26319, -26198, -26077, -25955, -25832, -25708, -25582, -25456,
    -25329, -25201, -25072, -24942, -24811, -24680, -24547, -24413,
    -24279, -24143, -24007, -23870, -23731, -23592, -23452, -23311,
    -23170, -23027, -22884, -22739, -22594, -22448, -22301, -22154,
    -22005, -21856, -21705, -21554, -21403, -21250, -21096, -20942,
    -20787, -20631, -20475, -20317, -20159, -20000, -19841, -19680,
    -19519, -19357, -19195, -19032, -18868, -18703, -18537, -18371,
    -18204, -18037, -17869, -17700, -17530, -17360, -17189, -17018,
    -16846, -16673, -16499, -16325, -16151, -15976, -15800, -15623,
    -15446, -15269, -15090, -14912, -14732, -14553, -14372, -14191,
    -14010, -13828, -13645, -13462, -13279, -13094, -12910, -12725,
    -12539, -12353, -12167, -11980, -11793, -11605, -11417, -11228,
    -11039, -10849, -10659, -10469, -10278, -10087,  -9896,  -9704,
     -9512,  -9319,  -9126,  -8933,  -8739,  -8545,  -8351,  -8157,
     -7962,  -7767,  -7571,  -7375,  -7179,  -6983,  -6786,  -6590,
     -6393,  -6195,  -5998,  -5800,  -5602,  -5404,  -5205,  -5007,
     -4808,  -4609,  -4410,  -4210,  -4011,  -3811,  -3612,  -3412,
     -3212,  -3012,  -2811,  -2611,  -2410,  -2210,  -2009,  -1809,
     -1608,  -1407,  -1206,  -1005,   -804,   -603,   -402,   -201,
];

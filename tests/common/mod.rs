//! Shared fixtures for the integration tests.
//!
//! - `REALGDP`: US real GDP, quarterly 1959Q1–2009Q3 (203 observations,
//!   billions of chained 2005 dollars).
//! - `HP_CYCLE_TREND`: published Hodrick–Prescott (λ = 1600) cycle and trend
//!   of `REALGDP`, as tabulated by Stata's `hprescott`.
//! - `BK_CYCLE`: regression vector (closed-form) for the Baxter–King
//!   (6, 32, K = 12) cycle of `REALGDP`, evaluated from the closed-form kernel
//!   weights. Not an externally published table.
//! - `CF_CYCLE`: regression vector (closed-form) for the Christiano–Fitzgerald
//!   (6, 32, drift, random walk) cycle of `REALGDP`, evaluated from the
//!   closed-form boundary weights. Not an externally published table.
#![allow(dead_code)]

pub const REALGDP: [f64; 203] = [
    2710.349, 2778.801, 2775.488, 2785.204, 2847.699, 2834.390,
    2839.022, 2802.616, 2819.264, 2872.005, 2918.419, 2977.830,
    3031.241, 3064.709, 3093.047, 3100.563, 3141.087, 3180.447,
    3240.332, 3264.967, 3338.246, 3376.587, 3422.469, 3431.957,
    3516.251, 3563.960, 3636.285, 3724.014, 3815.423, 3828.124,
    3853.301, 3884.520, 3918.740, 3919.556, 3950.826, 3980.970,
    4063.013, 4131.998, 4160.267, 4178.293, 4244.100, 4256.460,
    4283.378, 4263.261, 4256.573, 4264.289, 4302.259, 4256.637,
    4374.016, 4398.829, 4433.943, 4446.264, 4525.769, 4633.101,
    4677.503, 4754.546, 4876.166, 4932.571, 4906.252, 4953.050,
    4909.617, 4922.188, 4873.520, 4854.340, 4795.295, 4831.942,
    4913.328, 4977.511, 5090.663, 5128.947, 5154.072, 5191.499,
    5251.762, 5356.131, 5451.921, 5450.793, 5469.405, 5684.569,
    5740.300, 5816.222, 5825.949, 5831.418, 5873.335, 5889.495,
    5908.467, 5787.373, 5776.617, 5883.460, 6005.717, 5957.795,
    6030.184, 5955.062, 5857.333, 5889.074, 5866.370, 5871.001,
    5944.020, 6077.619, 6197.468, 6325.574, 6448.264, 6559.594,
    6623.343, 6677.264, 6740.275, 6797.344, 6903.523, 6955.918,
    7022.757, 7050.969, 7118.950, 7153.359, 7193.019, 7269.510,
    7332.558, 7458.022, 7496.600, 7592.881, 7632.082, 7733.991,
    7806.603, 7865.016, 7927.393, 7944.697, 8027.693, 8059.598,
    8059.476, 7988.864, 7950.164, 8003.822, 8037.538, 8069.046,
    8157.616, 8244.294, 8329.361, 8417.016, 8432.485, 8486.435,
    8531.108, 8643.769, 8727.919, 8847.303, 8904.289, 9003.180,
    9025.267, 9044.668, 9120.684, 9184.275, 9247.188, 9407.052,
    9488.879, 9592.458, 9666.235, 9809.551, 9932.672, 10008.874,
    10103.425, 10194.277, 10328.787, 10507.575, 10601.179, 10684.049,
    10819.914, 11014.254, 11043.044, 11258.454, 11267.867, 11334.544,
    11297.171, 11371.251, 11340.075, 11380.128, 11477.868, 11538.770,
    11596.430, 11598.824, 11645.819, 11738.706, 11935.461, 12042.817,
    12127.623, 12213.818, 12303.533, 12410.282, 12534.113, 12587.535,
    12683.153, 12748.699, 12915.938, 12962.462, 12965.916, 13060.679,
    13099.901, 13203.977, 13321.109, 13391.249, 13366.865, 13415.266,
    13324.600, 13141.920, 12925.410, 12901.504, 12990.341,
];

pub const HP_CYCLE_TREND: [[f64; 2]; 203] = [
    [39.51191484487845, 2670.8370851551217],
    [80.08853245681075, 2698.712467543189],
    [48.87545512195402, 2726.612544878046],
    [30.59193256079834, 2754.612067439202],
    [64.8826673342196, 2782.8163326657805],
    [23.04024204546704, 2811.349757954533],
    [-1.3553123694873648, 2840.3773123694873],
    [-67.46236512580754, 2870.0783651258075],
    [-81.3674383685343, 2900.6314383685344],
    [-60.16789026443257, 2932.1728902644327],
    [-46.369224331382156, 2964.788224331382],
    [-20.695339155704005, 2998.525339155704],
    [-2.162152558595608, 3033.4031525585956],
    [-4.718647774311648, 3069.4276477743115],
    [-13.556456691690073, 3106.60345669169],
    [-44.3692620447564, 3144.9322620447565],
    [-43.3202737821166, 3184.4072737821166],
    [-44.54697106352069, 3224.993971063521],
    [-26.29875787765286, 3266.6307578776527],
    [-44.26119635629266, 3309.2281963562928],
    [-14.434411907624963, 3352.680411907625],
    [-20.26686669186438, 3396.8538666918644],
    [-19.137001362088995, 3441.606001362089],
    [-54.82458977940951, 3486.7815897794094],
    [-15.962445179377937, 3532.213445179378],
    [-13.740115428745412, 3577.7001154287454],
    [13.254828134039144, 3623.0301718659607],
    [56.03040174253829, 3667.983598257462],
    [103.0743373627106, 3712.348662637289],
    [72.17534795943993, 3755.94865204056],
    [54.629725036932086, 3798.671274963068],
    [44.07065050666142, 3840.4493494933386],
    [37.49016270204993, 3881.24983729795],
    [-1.5112441999231123, 3921.067244199923],
    [-9.093507374079763, 3959.91950737408],
    [-16.853619467602584, 3997.8236194676024],
    [28.2221103143429, 4034.790889685657],
    [61.17590627896425, 4070.8220937210353],
    [54.33135391434371, 4105.935646085656],
    [38.10480376716623, 4140.188196232833],
    [70.42964928802849, 4173.670350711972],
    [49.96346842507592, 4206.496531574924],
    [44.55282059571255, 4238.825179404287],
    [-7.584961950576144, 4270.845961950577],
    [-46.2033924769712, 4302.7763924769715],
    [-70.5402436455297, 4334.8292436455295],
    [-64.92941099801465, 4367.188410998015],
    [-143.35670242395554, 4399.993702423955],
    [-59.328344930890125, 4433.34434493089],
    [-68.42096758743628, 4467.249967587436],
    [-67.7401192465486, 4501.683119246549],
    [-90.30958565658057, 4536.573585656581],
    [-46.039814991368075, 4571.808814991368],
    [25.88118806672992, 4607.21981193327],
    [34.894193719122995, 4642.608806280877],
    [76.75179642495095, 4677.794203575049],
    [163.5497817724172, 4712.616218227583],
    [185.60796547656173, 4746.963034523438],
    [125.42694463927182, 4780.825055360729],
    [138.7413113837174, 4814.308688616283],
    [62.01826599282231, 4847.598734007178],
    [41.22129542972198, 4880.966704570278],
    [-41.202874758423604, 4914.722874758424],
    [-94.86328233441964, 4949.20328233442],
    [-189.4232132641573, 4984.718213264157],
    [-189.57666396200875, 5021.518663962009],
    [-146.40924133426506, 5059.7372413342655],
    [-121.87706687212176, 5099.388066872122],
    [-49.730756290781756, 5140.393756290781],
    [-53.65375213897278, 5182.600752138973],
    [-71.75241524251214, 5225.824415242512],
    [-78.34757283225463, 5269.846572832254],
    [-62.64220687943907, 5314.404206879439],
    [-3.054332122210326, 5359.185332122211],
    [48.08218808024685, 5403.838811919753],
    [2.7813993267363912, 5448.011600673263],
    [-21.975704151732316, 5491.380704151732],
    [150.9441335012807, 5533.62486649872],
    [165.8909029574852, 5574.409097042515],
    [202.72925480499816, 5613.492745195002],
    [175.21015781760616, 5650.7388421823935],
    [145.2808749847536, 5686.137125015246],
    [153.54816294750253, 5719.7868370524975],
    [137.61697779988754, 5751.878022200112],
    [125.77030803407706, 5782.696691965923],
    [-25.241868468956454, 5812.614868468956],
    [-65.46618027042405, 5842.083180270424],
    [11.923520235803153, 5871.536479764197],
    [104.34829701887429, 5901.368702981125],
    [25.813761847683963, 5931.981238152316],
    [66.34330880534071, 5963.8406911946595],
    [-42.36780162594641, 5997.429801625946],
    [-175.9397735321818, 6033.272773532181],
    [-182.7933311233055, 6071.867331123305],
    [-247.2312362505918, 6113.601236250592],
    [-287.7470049336489, 6158.748004933649],
    [-263.40663366935405, 6207.4266336693545],
    [-181.95727707636252, 6259.576277076362],
    [-117.50346062746212, 6314.971460627462],
    [-47.698986497183796, 6373.272986497183],
    [14.195782802878966, 6434.068217197121],
    [62.67929662760798, 6496.914703372392],
    [61.96413196753747, 6561.378868032462],
    [50.19769125317907, 6627.066308746821],
    [46.65364933213823, 6693.621350667861],
    [36.62430749527266, 6760.719692504727],
    [75.45680850246481, 6828.066191497535],
    [60.52940492147536, 6895.388595078524],
    [60.29518881462354, 6962.461811185376],
    [21.870421366526898, 7029.098578633473],
    [23.800679268247222, 7095.149320731753],
    [-7.119129802169482, 7160.47812980217],
    [-31.94497359120851, 7224.963973591209],
    [-18.971370389341246, 7288.4813703893415],
    [-18.326872878451468, 7350.8848728784515],
    [46.004823365975426, 7412.0171766340245],
    [24.890477064030165, 7471.70952293597],
    [63.059093921272506, 7529.821906078728],
    [45.852123094981835, 7586.2298769050185],
    [93.14260180878318, 7640.848398191217],
    [112.98190970953692, 7693.621090290463],
    [120.4662123176704, 7744.549787682329],
    [133.68606146012462, 7793.706938539875],
    [103.4567175813736, 7841.2402824186265],
    [140.311887337205, 7887.381112662795],
    [127.17261693510045, 7932.4253830648995],
    [82.7192576528214, 7976.756742347178],
    [-31.974322117525844, 8020.838322117525],
    [-115.02095351940625, 8065.184953519406],
    [-106.46948374567728, 8110.291483745677],
    [-119.04287189253682, 8156.580871892536],
    [-135.36353362929913, 8204.4095336293],
    [-96.44348283027102, 8254.059482830271],
    [-61.43413116116608, 8305.728131161166],
    [-30.191613110979233, 8359.55261311098],
    [1.3843331635525828, 8415.631666836447],
    [-41.56016073666615, 8474.045160736667],
    [-48.43882841860977, 8534.87382841861],
    [-67.06442838867042, 8598.17242838867],
    [-20.196444885799792, 8663.9654448858],
    [-4.31644688108463, 8732.235446881084],
    [44.35061943264736, 8802.952380567353],
    [28.205505641555646, 8876.083494358445],
    [51.55624419490778, 8951.623755805093],
    [-4.318760899315748, 9029.585760899316],
    [-65.34632828542271, 9110.014328285422],
    [-72.26757738268498, 9192.951577382684],
    [-94.12378615444868, 9278.398786154448],
    [-119.12406532883688, 9366.312065328837],
    [-49.53669826751866, 9456.588698267518],
    [-60.17251579067488, 9549.051515790676],
    [-51.03438828313483, 9643.492388283135],
    [-73.43057830678117, 9739.665578306782],
    [-27.742451930549578, 9837.293451930549],
    [-3.380481112519192, 9936.05248111252],
    [-26.727798777943462, 10035.601798777943],
    [-32.17342505148372, 10135.598425051483],
    [-41.40567518359967, 10235.6826751836],
    [-6.687756033938058, 10335.474756033938],
    [73.00600408459468, 10434.568995915406],
    [68.62345670680043, 10532.5555432932],
    [54.97882461487461, 10629.070175385126],
    [96.1224409305596, 10723.791559069441],
    [197.82127701038917, 10816.432722989612],
    [136.27722768487547, 10906.766772315124],
    [263.76354948672633, 10994.690450513273],
    [187.68132568151668, 11080.185674318484],
    [171.1447873158413, 11163.399212684159],
    [52.575864608266784, 11244.595135391733],
    [47.106522285317624, 11324.144477714683],
    [-62.376134842410465, 11402.451134842411],
    [-99.82044354035315, 11479.948443540354],
    [-79.1627554899751, 11557.030755489975],
    [-95.26003459472304, 11634.030034594723],
    [-114.79876803691695, 11711.228768036917],
    [-190.0259054765902, 11788.84990547659],
    [-221.22564734395564, 11867.044647343955],
    [-207.1394278781845, 11945.845427878185],
    [-89.68541528904825, 12025.146415289048],
    [-61.89531564415665, 12104.712315644156],
    [-56.62878162551715, 12184.251781625517],
    [-49.61678134413705, 12263.434781344136],
    [-38.36288992144182, 12341.895889921441],
    [-8.95667199145646, 12419.238671991456],
    [39.070284618668666, 12495.04271538133],
    [18.652990001844955, 12568.882009998155],
    [42.79803532226833, 12640.354964677732],
    [39.62735362631611, 12709.071646373684],
    [141.26912918778544, 12774.668870812215],
    [125.65377918443664, 12836.808220815563],
    [70.67642758858892, 12895.23957241141],
    [110.88766476031924, 12949.79133523968],
    [99.56490829291761, 13000.336091707082],
    [157.16127098809375, 13046.815729011907],
    [231.8746375812716, 13089.234362418729],
    [263.5546670125277, 13127.694332987472],
    [204.42209657392596, 13162.442903426074],
    [221.3739418903715, 13193.892058109628],
    [102.01845477671122, 13222.58154522329],
    [-107.26947166633909, 13249.18947166634],
    [-349.0477058718843, 13274.457705871884],
    [-397.557072853353, 13299.061072853354],
    [-333.11524280806225, 13323.456242808063],
];

pub const BK_CYCLE: [f64; 179] = [
    -2.10884827156616, -0.5043640528355269, -15.516789258155178,
    -34.96893822447097, -46.71199615999603, -46.457990971970766,
    -35.85860977693173, -22.90742561988175, -16.32020691255584,
    -20.33420283525313, -31.26040246257938, -39.07418139870867,
    -33.89191735740525, -13.06902963421792, 18.62238063407962,
    51.494709584832634, 74.35968056595917, 78.34492037609442,
    62.85843260008979, 35.1339809485472, 8.061662460679322,
    -8.429399862837016, -10.552624108953147, 0.22979827399036878,
    19.847733337410148, 39.530905578580246, 55.19622494184969,
    65.7338672955367, 69.58155208085455, 61.880744614347094,
    40.06946892833844, 6.908440712174219, -31.60604679509366,
    -67.09838600283047, -89.54114257604628, -95.0434943235417,
    -89.51886557403803, -82.10636065740493, -77.83648100414004,
    -70.61081203283993, -49.160551339066366, -7.30515129152807,
    49.069268939173924, 104.95450475452955, 145.45168344868193,
    162.06266935654597, 155.86979384295273, 131.1784715586228,
    91.14637086019695, 33.06834667610146, -40.70828966700871,
    -114.21780959596046, -162.15720254627337, -170.44480600164943,
    -146.8476397376236, -108.94680499973066, -76.5936466686224,
    -60.15140128235755, -56.45243739398759, -54.81660318140567,
    -48.39466894973367, -33.875190154898554, -9.91940848695279,
    20.62621084637143, 52.315758054649294, 83.64650345445685,
    115.0989674077255, 142.1984123043742, 160.68982894038373,
    161.88840249559036, 137.47220990596756, 90.21555875662779,
    34.64390508536943, -8.480207725020861, -22.556342375864816,
    -4.518447524783255, 30.76201762367363, 53.85718465112876,
    34.320386926503076, -33.34814019814671, -127.68680865250705,
    -214.29466782537816, -265.57270627360174, -273.0101376169059,
    -242.0073173088607, -184.47614388658792, -110.99733188442859,
    -35.98169446724087, 23.591940032975018, 56.1504190796318,
    64.21244999782182, 57.46395550431015, 49.15708119192176,
    49.77897093425487, 56.11716717359306, 58.99259857956392,
    49.13640930536036, 24.22247907106015, -9.086811024063536,
    -37.45341854234043, -49.579889604350996, -44.361815205313405,
    -27.69345073765392, -5.99673991965237, 17.58488886844961,
    40.17229118502357, 58.77957274093022, 72.99615521856639,
    86.18592798645432, 101.28948052164772, 118.1880856192814,
    129.9565240574604, 126.32050293610715, 99.56372779301356,
    47.520647086170754, -21.6138246295515, -92.11789722303111,
    -143.1985745134724, -160.89326837493886, -143.51887718825898,
    -104.82739015605456, -64.05073743574147, -37.73118459170486,
    -33.496211409519375, -44.993686600474646, -58.85361474037866,
    -61.42369011119665, -43.615450359233165, -8.35884806631178,
    28.00661618800636, 42.40854747032553, 24.05073577070239,
    -18.02879119888061, -63.936765880129684, -95.21186727097201,
    -105.6594214019202, -100.80675394258145, -87.29133949986964,
    -71.05781337326286, -57.400186728112146, -49.642850501577044,
    -46.76700844070554, -48.75802443131711, -49.57736271333951,
    -44.386556931814084, -29.727274702236144, -7.939148001313498,
    16.834207376593568, 41.100987163403246, 66.4773306745764,
    97.66543123587714, 138.75011282547547, 184.8264672063299,
    218.07098071338066, 215.25687094778093, 166.26347470608954,
    88.44327083446804, 14.242897393027178, -31.198556978722735,
    -47.01350568135072, -54.427069826472646, -74.17512788470906,
    -108.45568375902326, -142.03602179141927, -154.71210006859005,
    -134.5159739479019, -88.18398685111771, -34.41632974107847,
    5.462751365627412, 22.945883043972884, 21.643864960512673,
    16.302166256169244, 22.03315375296262, 42.8598936617303,
    70.82580101925947, 96.47002739798685, 115.31867083777865,
    126.02130477231967, 127.29459488391504,
];

pub const CF_CYCLE: [f64; 203] = [
    61.178134084604665, 67.6516052992319, 70.74307609600453,
    67.7541719066453, 53.47915315860223, 24.89826418652467,
    -13.745718961505077, -50.36188964089513, -70.71012511530483,
    -67.06673160556235, -43.66144807157339, -14.62566466465784,
    4.432491110739647, 5.5054259241289, -8.092776946972975,
    -25.311794580235045, -35.12215348032825, -32.98618675868386,
    -22.295928999089483, -10.891946589743355, -5.70588756165094,
    -8.859146138244071, -16.831701386278965, -22.408393642317648,
    -18.192505286947693, -0.36558551110317694, 28.66095939142155,
    60.10941248682482, 82.01548500231509, 84.84423409546288,
    66.72167139496493, 34.95412176616158, 2.4300401305132198,
    -19.12975561530098, -24.80109270524642, -17.454483128376566,
    -4.054509255868155, 9.375228596779962, 20.148824206186077,
    27.401947409780462, 29.02965028373781, 20.806145931071473,
    -0.7549606997764329, -34.04296887887382, -70.71169022271161,
    -99.14589234036697, -111.13198535673024, -106.73899236500782,
    -93.35585589578561, -79.30521292183194, -66.88833445704971,
    -50.39143416735696, -20.78939683265633, 26.39161835358027,
    86.07624946913867, 145.21618623858424, 189.4772143244452,
    209.81755534524098, 204.42062122759242, 175.79353818858155,
    126.97016662518817, 61.02577738820319, -15.680355932805014,
    -90.48529317517819, -146.3511438827403, -169.52702443335028,
    -158.2115565242952, -125.28754420665341, -91.7593630948893,
    -74.45177164895443, -76.31283646464657, -86.16986414407438,
    -87.86077484827126, -71.68157136817392, -39.65880760477357,
    -1.444522971131347, 34.704128822592594, 67.68708870579212,
    101.17972247584359, 135.67888008680472, 162.79787475738488,
    168.0966265580089, 141.52528109792448, 87.61780264891897,
    26.755513555034987, -14.94384729367021, -21.042956294460886,
    4.7634072657103275, 40.179717024056174, 56.750754501375575,
    35.25628987778199, -24.92373561161112, -106.6864926149739,
    -184.07382679488936, -233.22466170648838, -240.22716119237913,
    -203.92853081656386, -134.5342390034947, -49.63218621702533,
    31.178424776868994, 92.07064996978829, 125.63096200875678,
    134.38231135347908, 128.09961562701457, 117.97858943827389,
    110.70190826549539, 105.66376655755275, 96.73123332702507,
    77.18815635884906, 44.74594580922745, 3.734541127598071,
    -36.567181276535706, -66.30912568715361, -79.67122485132806,
    -77.25817184272293, -65.10998246656305, -50.95798903041687,
    -39.86382636492239, -31.776098093365622, -22.466130775092473,
    -7.250548309266033, 14.869599277237192, 39.28839650505976,
    57.25656070381442, 59.761263794267116, 41.63047401093836,
    4.037221740004693, -45.15805732040027, -92.94138708297328,
    -124.34052278996784, -127.23017053480271, -97.83477844530543,
    -44.324211850748966, 14.789430656271222, 58.618435465266,
    74.9483418204303, 67.57077625858291, 54.102683595092955,
    54.462517324613614, 77.16698280279853, 112.99139759466793,
    140.74651786073122, 141.17105773569034, 109.00951284308677,
    55.03668581463339, -2.2908207630304815, -48.274897167073476,
    -78.04746995060947, -94.46406365538425, -102.03563242463082,
    -103.28682690067589, -99.9184929757616, -95.50556644739774,
    -94.99802147702898, -100.3564287186109, -106.80639256434486,
    -104.69961256826056, -86.73075689560143, -54.295374866703455,
    -16.463726965302403, 18.41199967886321, 50.84860405122119,
    89.55894603307944, 140.98446202964402, 197.87764395829117,
    238.41542504366646, 239.23062284116332, 193.2542808937527,
    117.53989282201448, 43.256189475367016, -5.406153306352374,
    -26.945943715169772, -40.30097425708482, -66.69580519834933,
    -110.70369541179193, -155.97562706189137, -178.54183325630476,
    -166.0570824989673, -127.14970352941147, -84.15629973980121,
    -56.4619380377699, -48.359662422191235, -49.89027135000243,
    -47.50522123687805, -34.269687341647895, -12.101807437041773,
    12.92012676572751, 35.665864365005596, 53.12198222481553,
    63.39177454228444, 66.89693655323899, 70.13861693999361,
    86.51800545784036, 128.6735691481103, 194.61867707266916,
    258.85637149745384, 279.83860671133885, 223.7658801752476,
    90.05086186540221, -81.12756085372662, -227.76399468418288,
    -300.53641796175435, -289.48641484217836,
];

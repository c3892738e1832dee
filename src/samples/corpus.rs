//! Rule descriptions used by the end-to-end tests.

pub(super) const US_ENGLISH: &str = "\
%simplified:
    -x: minus >>;
    x.x: << point >>;
    zero; one; two; three; four; five; six; seven; eight; nine;
    ten; eleven; twelve; thirteen; fourteen; fifteen; sixteen;
        seventeen; eighteen; nineteen;
    20: twenty[->>];
    30: thirty[->>];
    40: forty[->>];
    50: fifty[->>];
    60: sixty[->>];
    70: seventy[->>];
    80: eighty[->>];
    90: ninety[->>];
    100: << hundred[ >>];
    1000: << thousand[ >>];
    1,000,000: << million[ >>];
    1,000,000,000: << billion[ >>];
    1,000,000,000,000: << trillion[ >>];
    1,000,000,000,000,000: =#,##0=;
%alt-teens:
    =%simplified=;
    1000>: <%%alt-hundreds<[ >>];
    10,000: =%simplified=;
%%alt-hundreds:
    0: SHOULD NEVER GET HERE!;
    10: <%simplified< thousand;
    11: =%simplified= hundred>%%empty>;
%%empty:
    0:;
%ordinal:
    zeroth; first; second; third; fourth; fifth; sixth; seventh;
        eighth; ninth;
    tenth; eleventh; twelfth; thirteenth; fourteenth;
        fifteenth; sixteenth; seventeenth; eighteenth;
        nineteenth;
    twentieth; twenty->>;
    30: thirtieth; thirty->>;
    40: fortieth; forty->>;
    50: fiftieth; fifty->>;
    60: sixtieth; sixty->>;
    70: seventieth; seventy->>;
    80: eightieth; eighty->>;
    90: ninetieth; ninety->>;
    100: <%simplified< hundredth; <%simplified< hundred >>;
    1000: <%simplified< thousandth; <%simplified< thousand >>;
    1,000,000: <%simplified< millionth; <%simplified< million >>;
    1,000,000,000: <%simplified< billionth;
        <%simplified< billion >>;
    1,000,000,000,000: <%simplified< trillionth;
        <%simplified< trillion >>;
    1,000,000,000,000,000: =#,##0=;
%default:
    -x: minus >>;
    x.x: << point >>;
    =%simplified=;
    100: << hundred[ >%%and>];
    1000: << thousand[ >%%and>];
    100,000>>: << thousand[>%%commas>];
    1,000,000: << million[>%%commas>];
    1,000,000,000: << billion[>%%commas>];
    1,000,000,000,000: << trillion[>%%commas>];
    1,000,000,000,000,000: =#,##0=;
%%and:
    and =%default=;
    100: =%default=;
%%commas:
    ' and =%default=;
    100: , =%default=;
    1000: , <%default< thousand, >%default>;
    1,000,000: , =%default=;
%%lenient-parse:
    & ' ' , ',' ;
";

pub(super) const SPANISH: &str = "\
-x: menos >>;
x.x: << punto >>;
cero; uno; dos; tres; cuatro; cinco; seis; siete; ocho; nueve;
diez; once; doce; trece; catorce; quince; dieciséis;
    diecisiete; dieciocho; diecinueve;
veinte; veintiuno; veintidós; veintitrés; veinticuatro;
    veinticinco; veintiséis; veintisiete; veintiocho;
    veintinueve;
30: treinta[ y >>];
40: cuarenta[ y >>];
50: cincuenta[ y >>];
60: sesenta[ y >>];
70: setenta[ y >>];
80: ochenta[ y >>];
90: noventa[ y >>];
100: cien;
101: ciento >>;
200: doscientos[ >>];
300: trescientos[ >>];
400: cuatrocientos[ >>];
500: quinientos[ >>];
600: seiscientos[ >>];
700: setecientos[ >>];
800: ochocientos[ >>];
900: novecientos[ >>];
1000: mil[ >>];
2000: << mil[ >>];
1,000,000: un millón[ >>];
2,000,000: << millón[ >>];
1,000,000,000: =#,##0= (incomplete data);
";

pub(super) const FRENCH: &str = "\
%main:
    -x: moins >>;
    x.x: << virgule >>;
    zéro; un; deux; trois; quatre; cinq; six; sept; huit; neuf;
    dix; onze; douze; treize; quatorze; quinze; seize;
        dix-sept; dix-huit; dix-neuf;
    20: vingt[->%%alt-ones>];
    30: trente[->%%alt-ones>];
    40: quarante[->%%alt-ones>];
    50: cinquante[->%%alt-ones>];
    // 60 to 79 count by twenties
    60/20: soixante[->%%alt-ones>];
    71: soixante et onze;
    72/20: soixante->%%alt-ones>;
    80: quatre-vingts; 81/20: quatre-vingt->>;
    100: cent[ >>];
    200: << cents[ >>];
    1000: mille[ >>];
    1100>: onze cents[ >>];
    1200: mille >>;
    2000: << mille[ >>];
    1,000,000: << million[ >>];
    1,000,000,000: << milliarde[ >>];
    1,000,000,000,000: << billion[ >>];
    1,000,000,000,000,000: =#,##0=;
%%alt-ones:
    ; et-un; =%main=;
";

pub(super) const GERMAN: &str = "\
%alt-ones:
    null; eins; =%%main=;
%%main:
    null; ein; zwei; drei; vier; fünf; sechs; sieben; acht; neun;
    zehn; elf; zwölf; >>zehn;
    20: [>>und]zwanzig;
    30: [>>und]dreißig;
    40: [>>und]vierzig;
    50: [>>und]fünfzig;
    60: [>>und]sechzig;
    70: [>>und]siebzig;
    80: [>>und]achtzig;
    90: [>>und]neunzig;
    100: hundert[>%alt-ones>];
    200: <<hundert[>%alt-ones>];
    1000: tausend[>%alt-ones>];
    2000: <<tausend[>%alt-ones>];
    1,000,000: eine Million[ >%alt-ones>];
    2,000,000: << Millionen[ >%alt-ones>];
    1,000,000,000: eine Milliarde[ >%alt-ones>];
    2,000,000,000: << Milliarden[ >%alt-ones>];
    1,000,000,000,000: eine Billion[ >%alt-ones>];
    2,000,000,000,000: << Billionen[ >%alt-ones>];
    1,000,000,000,000,000: =#,##0=;
";

pub(super) const ORDINAL_ABBREVIATIONS: &str = "\
%main:
    =#,##0==%%abbrev=;
%%abbrev:
    th; st; nd; rd; th;
    20: >>;
    100: >>;
";

pub(super) const MESSAGE_1: &str = "\
x.0: The search found <<.;
no files; one file; two files; three files; four files; five files;
    six files; seven files; eight files; nine files;
=#,##0= files;
";

pub(super) const DOLLARS_AND_CENTS: &str = "\
%dollars-and-cents:
    x.0: << [and >%%cents>];
    0.x: >%%cents>;
    0: zero dollars; one dollar; =%%main= dollars;
%%main:
    zero; one; two; three; four; five; six; seven; eight; nine;
    ten; eleven; twelve; thirteen; fourteen; fifteen; sixteen;
        seventeen; eighteen; nineteen;
    20: twenty[->>];
    30: thirty[->>];
    40: forty[->>];
    50: fifty[->>];
    60: sixty[->>];
    70: seventy[->>];
    80: eighty[->>];
    90: ninety[->>];
    100: << hundred[ >>];
    1000: << thousand[ >>];
    1,000,000: << million[ >>];
    1,000,000,000: << billion[ >>];
    1,000,000,000,000: << trillion[ >>];
    1,000,000,000,000,000: =#,##0=;
%%cents:
    100: <%%main< cent[s];
%dollars-and-hundredths:
    x.0: <%%main< and >%%hundredths>/100 dollars;
%%hundredths:
    100: <00<;
";

pub(super) const DECIMAL_AS_FRACTION: &str = "\
%main:
    -x: minus >>;
    x.x: [<< and ]>%%frac>;
    zero; one; two; three; four; five; six; seven; eight; nine;
    ten; eleven; twelve; thirteen; fourteen; fifteen; sixteen;
        seventeen; eighteen; nineteen;
    twenty[->>];
    30: thirty[->>];
    40: forty[->>];
    50: fifty[->>];
    60: sixty[->>];
    70: seventy[->>];
    80: eighty[->>];
    90: ninety[->>];
    100: << hundred[ >>];
    1000: << thousand[ >>];
    1,000,000: << million[ >>];
    1,000,000,000: << billion[ >>];
    1,000,000,000,000: << trillion[ >>];
    1,000,000,000,000,000: =#,##0=;
%%frac:
    10: << tenth[s];
    100: << hundredth[s];
    1000: << thousandth[s];
    10,000: << ten-thousandth[s];
    100,000: << hundred-thousandth[s];
    1,000,000: << millionth[s];
";

pub(super) const CLOSEST_FRACTION: &str = "\
%main:
    x.0: <#,##0<[ >%%frac>];
    0.x: >%%frac>;
%%frac:
    2: 1/2;
    3: <0</3;
    4: <0</4;
    5: <0</5;
    6: <0</6;
    7: <0</7;
    8: <0</8;
    9: <0</9;
    10: <0</10;
";

pub(super) const STOCK: &str = "\
%main:
    x.0: <#,##0<[>%%frac1>];
    0.x: >%%frac2>;
%%frac1:
    4: <%%quarters<;
    8: ' <0</8;
    16: ' <0</16;
    32: ' <0</32;
    100: .<00<;
%%frac2:
    4: <%%quarters<;
    8: <0</8;
    16: <0</16;
    32: <0</32;
    100: 0.<00<;
%%quarters:
    ; ¼; ½; ¾;
%%lenient-parse:
    & '1/4' , ¼
    & '1/2' , ½
    & '3/4' , ¾
;
";

pub(super) const ABBREVIATED_ENGLISH: &str = "\
=#,##0=;
1,000,000: <##0.###< million;
1,000,000,000: <##0.###< billion;
1,000,000,000,000: <##0.###< trillion;
";

pub(super) const UNITS: &str = "\
%main:
    0.x: >%%small>;
    0: =##0.###= m;
    1,000: <##0.###< km;
    1,000,000: <##0.###< Mm;
    1,000,000,000: <##0.###< Gm;
    1,000,000,000,000: <#,##0.###< Tm;
%%small:
    1,000,000,000,000: <%%small2<;
%%small2:
    0: =##0= pm;
    1,000: <##0.###< nm;
    1,000,000: <##0.###< µm;
    1,000,000,000: <##0.###< mm;
";

pub(super) const MESSAGE_2: &str = "\
x.0: There << free space on the disk.;
0: is no;
is one byte of;
are =0= bytes of;
1024/1024: is <0<K of;
1,048,576/1024: is 1 Mb of;
2,097,152/1024: are <0< Mb of;
";

pub(super) const DOZENS: &str = "\
zero; one; two; three; four; five; six;
seven; eight; nine; ten; eleven;
12/12: << dozen[ and >>];
144/12: << gross[, >>];
1000: << thousand[, >>];
10,000: =#,##0=;
";

pub(super) const DURATION_IN_SECONDS: &str = "\
%with-words:
    0 seconds; 1 second; =0= seconds;
    60/60: <%%min<[, >>];
    3600/60: <%%hr<[, >>>];
%%min:
    0 minutes; 1 minute; =0= minutes;
%%hr:
    0 hours; 1 hour; =0= hours;
%in-numerals:
    =0= sec.;
    60: =%%min-sec=;
    3600: =%%hr-min-sec=;
%%min-sec:
    0: :=00=;
    60/60: <0<>>;
%%hr-min-sec:
    0: :=00=;
    60/60: <00<>>;
    3600/60: <#,##0<:>>>;
%%lenient-parse:
    & : = . = ' ' = -;
";

pub(super) const DURATION_IN_HOURS: &str = "\
%with-words:
    x.0: <<[, >%%min-sec>];
    0 hours; 1 hour; =#,##0= hours;
%%min-sec:
    3600: =%%min-sec-implementation=;
%%min-sec-implementation:
    0 seconds; 1 second; =0= seconds;
    60/60: 1 minute[, >>];
    120/60: <0< minutes[, >>];
%in-numerals:
    x.0: <#,##0<:00;
    x.x: <#,##0<:>%%min-sec2>;
%%min-sec2:
    60: <00<;
    3600: <%%min-sec2-implementation<;
%%min-sec2-implementation:
    0: 00:=00=;
    60: =%%min-sec3=;
%%min-sec3:
    0: :=00=;
    60/60: <00<>>;
%%lenient-parse:
    & : = . = ' ' = -;
";

pub(super) const POUNDS_SHILLINGS_AND_PENCE: &str = "\
%main:
    x.0: £<#,##0<[ >%%shillings-and-pence>];
    0.x: >%%pence-alone>;
%%shillings-and-pence:
    240: <%%shillings-and-pence-implementation<;
%%pence-alone:
    240: <%%pence-alone-implementation<;
%%shillings-and-pence-implementation:
    0/; 0/=0=;
    12/12: <0</[>0>];
%%pence-alone-implementation:
    =0= d.;
    12/12: <0</[>0>];
";

pub(super) const ARABIC_NUMERALS: &str = "\
0; 1; 2; 3; 4; 5; 6; 7; 8; 9;
10: <<>>;
100: <<>>>;
1000: <<,>>>;
1,000,000: <<,>>>;
1,000,000,000: <<,>>>;
1,000,000,000,000: <<,>>>;
1,000,000,000,000,000: =#,##0=;
-x: ->>;
x.x: <<.>>;
";

pub(super) const WORDS_FOR_DIGITS: &str = "\
-x: minus >>;
x.x: << point >>;
zero; one; two; three; four; five; six;
    seven; eight; nine;
10: << >>;
100: << >>>;
1000: <<, >>>;
1,000,000: <<, >>>;
1,000,000,000: <<, >>>;
1,000,000,000,000: <<, >>>;
1,000,000,000,000,000: =#,##0=;
";

pub(super) const ROMAN_NUMERALS: &str = "\
%historical:
    =%modern=;
    // in early times, Roman numerals above 1,000 used these symbols
    1000: ↀ[>>]; 2000: ↀↀ[>>]; 3000: ↀↀↀ[>>]; 4000: ↀↁ[>>];
    5000: ↁ[>>]; 6000: ↁↀ[>>]; 7000: ↁↀↀ[>>];
    8000: ↁↀↀↀ[>>]; 9000: ↀↂ[>>];
    10,000: ↂ[>>]; 20,000: ↂↂ[>>]; 30,000: ↂↂↂ[>>];
    40,000: =#,##0=;
%modern:
    ; I; II; III; IV; V; VI; VII; VIII; IX;
    10: X[>>]; 20: XX[>>]; 30: XXX[>>]; 40: XL[>>]; 50: L[>>];
    60: LX[>>]; 70: LXX[>>]; 80: LXXX[>>]; 90: XC[>>];
    100: C[>>]; 200: CC[>>]; 300: CCC[>>]; 400: CD[>>]; 500: D[>>];
    600: DC[>>]; 700: DCC[>>]; 800: DCCC[>>]; 900: CM[>>];
    1000: M[>>]; 2000: MM[>>]; 3000: MMM[>>];
    4000: =#,##0=;
";

pub(super) const UK_ENGLISH: &str = "\
%simplified:
    -x: minus >>;
    x.x: << point >>;
    zero; one; two; three; four; five; six; seven; eight; nine;
    ten; eleven; twelve; thirteen; fourteen; fifteen; sixteen;
        seventeen; eighteen; nineteen;
    20: twenty[->>];
    30: thirty[->>];
    40: forty[->>];
    50: fifty[->>];
    60: sixty[->>];
    70: seventy[->>];
    80: eighty[->>];
    90: ninety[->>];
    100: << hundred[ >>];
    1000: << thousand[ >>];
    1,000,000: << million[ >>];
    1,000,000,000,000: << billion[ >>];
    1,000,000,000,000,000: =#,##0=;
%alt-teens:
    =%simplified=;
    1000>: <%%alt-hundreds<[ >>];
    10,000: =%simplified=;
    1,000,000: << million[ >%simplified>];
    1,000,000,000,000: << billion[ >%simplified>];
    1,000,000,000,000,000: =#,##0=;
%%alt-hundreds:
    0: SHOULD NEVER GET HERE!;
    10: <%simplified< thousand;
    11: =%simplified= hundred>%%empty>;
%%empty:
    0:;
%ordinal:
    zeroth; first; second; third; fourth; fifth; sixth; seventh;
        eighth; ninth;
    tenth; eleventh; twelfth; thirteenth; fourteenth;
        fifteenth; sixteenth; seventeenth; eighteenth;
        nineteenth;
    twentieth; twenty->>;
    30: thirtieth; thirty->>;
    40: fortieth; forty->>;
    50: fiftieth; fifty->>;
    60: sixtieth; sixty->>;
    70: seventieth; seventy->>;
    80: eightieth; eighty->>;
    90: ninetieth; ninety->>;
    100: <%simplified< hundredth; <%simplified< hundred >>;
    1000: <%simplified< thousandth; <%simplified< thousand >>;
    1,000,000: <%simplified< millionth; <%simplified< million >>;
    1,000,000,000,000: <%simplified< billionth;
        <%simplified< billion >>;
    1,000,000,000,000,000: =#,##0=;
%default:
    -x: minus >>;
    x.x: << point >>;
    =%simplified=;
    100: << hundred[ >%%and>];
    1000: << thousand[ >%%and>];
    100,000>>: << thousand[>%%commas>];
    1,000,000: << million[>%%commas>];
    1,000,000,000,000: << billion[>%%commas>];
    1,000,000,000,000,000: =#,##0=;
%%and:
    and =%default=;
    100: =%default=;
%%commas:
    ' and =%default=;
    100: , =%default=;
    1000: , <%default< thousand, >%default>;
    1,000,000: , =%default=;
%%lenient-parse:
    & ' ' , ',' ;
";

pub(super) const SWISS_FRENCH: &str = "\
%main:
    -x: moins >>;
    x.x: << virgule >>;
    zéro; un; deux; trois; quatre; cinq; six; sept; huit; neuf;
    dix; onze; douze; treize; quatorze; quinze; seize;
        dix-sept; dix-huit; dix-neuf;
    20: vingt[->%%alt-ones>];
    30: trente[->%%alt-ones>];
    40: quarante[->%%alt-ones>];
    50: cinquante[->%%alt-ones>];
    60: soixante[->%%alt-ones>];
    70: septante[->%%alt-ones>];
    80: octante[->%%alt-ones>];
    90: nonante[->%%alt-ones>];
    100: cent[ >>];
    200: << cents[ >>];
    1000: mille[ >>];
    1100>: onze cents[ >>];
    1200: mille >>;
    2000: << mille[ >>];
    1,000,000: << million[ >>];
    1,000,000,000: << milliarde[ >>];
    1,000,000,000,000: << billion[ >>];
    1,000,000,000,000,000: =#,##0=;
%%alt-ones:
    ; et-un; =%main=;
";

pub(super) const ITALIAN: &str = "\
%main:
    -x: meno >>;
    x.x: << virgola >>;
    zero; uno; due; tre; quattro; cinque; sei; sette; otto;
        nove;
    dieci; undici; dodici; tredici; quattordici; quindici; sedici;
        diciasette; diciotto; diciannove;
    20: venti; vent>%%with-i>;
    30: trenta; trent>%%with-i>;
    40: quaranta; quarant>%%with-a>;
    50: cinquanta; cinquant>%%with-a>;
    60: sessanta; sessant>%%with-a>;
    70: settanta; settant>%%with-a>;
    80: ottanta; ottant>%%with-a>;
    90: novanta; novant>%%with-a>;
    100: cento; cent[>%%with-o>];
    200: <<cento; <<cent[>%%with-o>];
    1000: mille; mill[>%%with-i>];
    2000: <<mila; <<mil[>%%with-a>];
    100,000>>: <<mila[ >>];
    1,000,000: =#,##0= (incomplete data);
%%with-a:
    azero; uno; adue; atre; aquattro; acinque; asei; asette; otto;
        anove;
    adieci; undici; adodici; atredici; aquattordici; aquindici; asedici;
        adiciasette; adiciotto; adiciannove;
    20: aventi; avent>%%with-i>;
    30: atrenta; atrent>%%with-i>;
    40: aquaranta; aquarant>%%with-a>;
    50: acinquanta; acinquant>%%with-a>;
    60: asessanta; asessant>%%with-a>;
    70: asettanta; asettant>%%with-a>;
    80: ottanta; ottant>%%with-a>;
    90: anovanta; anovant>%%with-a>;
    100: acento; acent[>%%with-o>];
    200: <%%with-a<cento; <%%with-a<cent[>%%with-o>];
    1000: amille; amill[>%%with-i>];
    2000: <%%with-a<mila; <%%with-a<mil[>%%with-a>];
    100,000: =%main=;
%%with-i:
    izero; uno; idue; itre; iquattro; icinque; isei; isette; otto;
        inove;
    idieci; undici; idodici; itredici; iquattordici; iquindici; isedici;
        idiciasette; idiciotto; idiciannove;
    20: iventi; ivent>%%with-i>;
    30: itrenta; itrent>%%with-i>;
    40: iquaranta; iquarant>%%with-a>;
    50: icinquanta; icinquant>%%with-a>;
    60: isessanta; isessant>%%with-a>;
    70: isettanta; isettant>%%with-a>;
    80: ottanta; ottant>%%with-a>;
    90: inovanta; inovant>%%with-a>;
    100: icento; icent[>%%with-o>];
    200: <%%with-i<cento; <%%with-i<cent[>%%with-o>];
    1000: imille; imill[>%%with-i>];
    2000: <%%with-i<mila; <%%with-i<mil[>%%with-a>];
    100,000: =%main=;
%%with-o:
    ozero; uno; odue; otre; oquattro; ocinque; osei; osette; otto;
        onove;
    odieci; undici; ododici; otredici; oquattordici; oquindici; osedici;
        odiciasette; odiciotto; odiciannove;
    20: oventi; ovent>%%with-i>;
    30: otrenta; otrent>%%with-i>;
    40: oquaranta; oquarant>%%with-a>;
    50: ocinquanta; ocinquant>%%with-a>;
    60: osessanta; osessant>%%with-a>;
    70: osettanta; osettant>%%with-a>;
    80: ottanta; ottant>%%with-a>;
    90: onovanta; onovant>%%with-a>;
    100: ocento; ocent[>%%with-o>];
    200: <%%with-o<cento; <%%with-o<cent[>%%with-o>];
    1000: omille; omill[>%%with-i>];
    2000: <%%with-o<mila; <%%with-o<mil[>%%with-a>];
    100,000: =%main=;
";

pub(super) const SWEDISH: &str = "\
noll; ett; två; tre; fyra; fem; sex; sjo; åtta; nio;
tio; elva; tolv; tretton; fjorton; femton; sexton; sjutton; arton; nitton;
20: tjugo[>>];
30: trettio[>>];
40: fyrtio[>>];
50: femtio[>>];
60: sextio[>>];
70: sjuttio[>>];
80: åttio[>>];
90: nittio[>>];
100: hundra[>>];
200: <<hundra[>>];
1000: tusen[ >>];
2000: << tusen[ >>];
1,000,000: en miljon[ >>];
2,000,000: << miljon[ >>];
1,000,000,000: en miljard[ >>];
2,000,000,000: << miljard[ >>];
1,000,000,000,000: en biljon[ >>];
2,000,000,000,000: << biljon[ >>];
1,000,000,000,000,000: =#,##0=
";

pub(super) const DUTCH: &str = "\
-x: min >>;
x.x: << komma >>;
(zero?); een; twee; drie; vier; vijf; zes; zeven; acht; negen;
tien; elf; twaalf; dertien; veertien; vijftien; zestien;
zeventien; achtien; negentien;
20: [>> en ]twintig;
30: [>> en ]dertig;
40: [>> en ]veertig;
50: [>> en ]vijftig;
60: [>> en ]zestig;
70: [>> en ]zeventig;
80: [>> en ]tachtig;
90: [>> en ]negentig;
100: << honderd[ >>];
1000: << duizend[ >>];
1,000,000: << miljoen[ >>];
1,000,000,000: << biljoen[ >>];
1,000,000,000,000: =#,##0=
";

pub(super) const JAPANESE: &str = "\
%financial:
    零; 壱; 弐; 参; 四; 伍; 六; 七; 八; 九;
    拾[>>];
    20: <<拾[>>];
    100: <<百[>>];
    1000: <<千[>>];
    10,000: <<万[>>];
    100,000,000: <<億[>>];
    1,000,000,000,000: <<兆[>>];
    10,000,000,000,000,000: =#,##0=;
%traditional:
    零; 一; 二; 三; 四; 五; 六; 七; 八; 九;
    十[>>];
    20: <<十[>>];
    100: <<百[>>];
    1000: <<千[>>];
    10,000: <<万[>>];
    100,000,000: <<億[>>];
    1,000,000,000,000: <<兆[>>];
    10,000,000,000,000,000: =#,##0=;
";

pub(super) const GREEK: &str = "\
zero (incomplete data); ένα; δύο; δρία; τέσσερα; πέντε; έξι; επτά; οκτώ; εννέα;
10: δέκα; ένδεκα; δώδεκα; δεκα>>;
20: είκοσι; εικοσι>>;
30: τριάντα; τριαντα>>;
40: σαράντα; σαραντα>>;
50: πενήντα; πενηντα>>;
60: εξήντα; εξηντα>>;
70: εβδομήντα; εβδομηντα>>;
80: ογδόντα; ογδοντα>>;
90: εννενήντα; εννενηντα>>;
100: εκατό[ν >>];
200: διακόσια[ >>];
300: τριακόσια[ >>];
400: τετρακόσια[ >>];
500: πεντακόσια[ >>];
600: εξακόσια[ >>];
700: επτακόσια[ >>];
800: οκτακόσια[ >>];
900: εννιακόσια[ >>];
1000: χίλια[ >>];
2000: << χίλια[ >>];
1,000,000: << εκατομμιόριο[ >>];
1,000,000,000: << δισεκατομμιόριο[ >>];
1,000,000,000,000: =#,##0=
";

pub(super) const RUSSIAN: &str = "\
ноль; один; два; три; четыре; пят; шест; семь; восемь; девят;
10: десят; одиннадцать;
двеннадцать; тринадцать; четырнадцать;
15: пятнадцать; шестнадцать; семнадцать; восемнадцать; девятнадцать;
20: двадцать[ >>];
30: трлдцать[ >>];
40: сорок[ >>];
50: пятьдесят[ >>];
60: шестьдесят[ >>];
70: семьдесят[ >>];
80: восемьдесят[ >>];
90: девяносто[ >>];
100: сто[ >>];
200: << сто[ >>];
1000: тысяча[ >>];
2000: << тысяча[ >>];
1,000,000: миллион[ >>];
2,000,000: << миллион[ >>];
1,000,000,000: =#,##0=;
";

pub(super) const HEBREW: &str = "\
zero (incomplete data); אהד; שגיים; שלושה;
4: אדבצה; חגוישה; ששה;
7: שבצה; שמוגה; תשצה;
10: צשדה[ >>];
20: צשדים[ >>];
30: שלושים[ >>];
40: אדבצים[ >>];
50: חמישים[ >>];
60: ששים[ >>];
70: שבצים[ >>];
80: שמוגים[ >>];
90: תשצים[ >>];
100: מאה[ >>];
200: << מאה[ >>];
1000: אלף[ >>];
2000: << אלף[ >>];
1,000,000: =#,##0= (incomplete data);
";

pub(super) const CHINESE_PLACE_VALUE: &str = "\
〇; 一; 二; 三; 四; 五; 六; 七; 八; 九;
10: <<>>;
100: <<>>>;
1000: <<>>>;
1,000,000: <<>>>;
1,000,000,000: <<>>>;
1,000,000,000,000: <<>>>;
1,000,000,000,000,000: =#,##0=;
";

pub(super) const HEBREW_ALPHABETIC: &str = "\
%%ones:
    (no zero); א; ב; ג; ד; ה; ו; ז; ח; ט;
%%tens:
    ; י; כ; ל; מ; נ; ס; ע; פ; צ;
%%hundreds:
    ; ק; ר; ש; ת;
%%tens-and-ones:
    =%%ones=′;
    10: <%%tens<′; <%%tens<″>%%ones>;
    15: ט″ו; 16: ט″ז;
    17: <%%tens<″>%%ones>;
    20: <%%tens<′; <%%tens<″>%%ones>;
%%low-order:
    ″=%%ones=;
    10: ″<%%tens<; =%%tens-and-ones=>%%null>;
    100: <%%hundreds<′; <%%hundreds<>>;
    500: ת″ק; תק>>;
    600: ת″ר; תר>>;
    700: ת″ש; תש>>;
    800: ת″ת; תת>>;
    900: תת″ק; תתק>>;
%%high-order:
    =%%ones=̈;
    10: <%%tens<̈[>>];
    15: ט̈ו̈; 16: ט̈ז̈;
    17: <%%tens<̈[>>];
    100: <%%hundreds<̈[>>];
    500: ת̈ק̈[>>];
    600: ת̈ר̈[>>];
    700: ת̈ש̈[>>];
    800: ת̈ת̈[>>];
    900: ת̈ת̈ק̈[>>];
%%null:
    ;
%main:
    =%%ones=′;
    10: =%%tens-and-ones=;
    100: =%%low-order=;
    1000: <%%high-order<[>%%low-order>];
";

pub(super) const GREEK_ALPHABETIC: &str = "\
%%low-order:
    (no zero); Α; Β; Γ; Δ; Ε; Ϝ; Ζ; Η; Θ;
    10: Ι[>>]; 20: Κ[>>]; 30: Λ[>>]; 40: Μ[>>]; 50: Ν[>>];
    60: Ξ[>>]; 70: Ο[>>]; 80: Π[>>]; 90: Ϟ[>>];
    100: Ρ[>>]; 200: Σ[>>]; 300: Τ[>>]; 400: Υ[>>];
    500: Φ[>>]; 600: Χ[>>]; 700: Ψ[>>]; 800: Ω[>>];
    900: Ϡ[>>];
    1000: Ἀ[>>]; 2000: Β̓[>>]; 3000: Γ̓[>>];
    4000: Δ̓[>>]; 5000: Ἐ[>>]; 6000: Ϝ̓[>>];
    7000: Ζ̓[>>]; 8000: Ἠ[>>]; 9000: Θ̓[>>];
%%high-order:
    (no zero); α; β; γ; δ; ε; Ϝ; ζ; η; θ;
    10: ι[>>]; 20: κ[>>]; 30: λ[>>]; 40: μ[>>]; 50: ν[>>];
    60: ξ[>>]; 70: ο[>>]; 80: π[>>]; 90: Ϟ[>>];
    100: ρ[>>]; 200: σ[>>]; 300: τ[>>]; 400: υ[>>];
    500: φ[>>]; 600: χ[>>]; 700: ψ[>>]; 800: ω[>>];
    900: π[>>];
    1000: ἀ[>>]; 2000: β̓[>>]; 3000: γ̓[>>];
    4000: δ̓[>>]; 5000: ἐ[>>]; 6000: Ϝ̓[>>];
    7000: ζ̓[>>]; 8000: ἠ[>>]; 9000: θ̓[>>];
%main:
    =%%low-order=;
    10,000: <%%high-order<Μ>%%high-order>;
    100,000,000: <%%high-order<Μ>>;
";

/// Every description, by name.
pub(super) const SAMPLES: &[(&str, &str)] = &[
    ("us-english", US_ENGLISH),
    ("spanish", SPANISH),
    ("french", FRENCH),
    ("german", GERMAN),
    ("ordinal-abbreviations", ORDINAL_ABBREVIATIONS),
    ("message-1", MESSAGE_1),
    ("dollars-and-cents", DOLLARS_AND_CENTS),
    ("decimal-as-fraction", DECIMAL_AS_FRACTION),
    ("closest-fraction", CLOSEST_FRACTION),
    ("stock", STOCK),
    ("abbreviated-english", ABBREVIATED_ENGLISH),
    ("units", UNITS),
    ("message-2", MESSAGE_2),
    ("dozens", DOZENS),
    ("duration-in-seconds", DURATION_IN_SECONDS),
    ("duration-in-hours", DURATION_IN_HOURS),
    ("pounds-shillings-and-pence", POUNDS_SHILLINGS_AND_PENCE),
    ("arabic-numerals", ARABIC_NUMERALS),
    ("words-for-digits", WORDS_FOR_DIGITS),
    ("roman-numerals", ROMAN_NUMERALS),
    ("uk-english", UK_ENGLISH),
    ("swiss-french", SWISS_FRENCH),
    ("italian", ITALIAN),
    ("swedish", SWEDISH),
    ("dutch", DUTCH),
    ("japanese", JAPANESE),
    ("greek", GREEK),
    ("russian", RUSSIAN),
    ("hebrew", HEBREW),
    ("chinese-place-value", CHINESE_PLACE_VALUE),
    ("hebrew-alphabetic", HEBREW_ALPHABETIC),
    ("greek-alphabetic", GREEK_ALPHABETIC),
];

pub(super) fn description(name: &str) -> &'static str {
    SAMPLES.iter().find(|(n, _)| *n == name).map(|(_, d)| *d).unwrap_or_else(|| panic!("no sample named {name}"))
}
